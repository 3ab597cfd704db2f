//! Open Model Exporter CLI
//!
//! Compile project snapshots into Framework Open Model JSON.

use clap::{Parser, Subcommand};
use open_model_exporter::project::loader::accepts_model;
use open_model_exporter::{
    compiler::model_file_name, load_project, Codec, CompileOptions, ExportSettings, Field,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "open-model-exporter")]
#[command(author, version, about = "Compile cuboid models into Open Model JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a project snapshot into a model file
    Compile {
        /// Project snapshot JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output file or directory (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export settings JSON; flags below override it
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Credit line written to the model
        #[arg(long)]
        credit: Option<String>,

        /// Do not write cube names
        #[arg(long)]
        no_names: bool,

        /// Do not write the group hierarchy
        #[arg(long)]
        no_groups: bool,

        /// Write JSON without whitespace
        #[arg(long)]
        minify: bool,

        /// Force a field in or out, e.g. "parent=false" (repeatable)
        #[arg(long, value_parser = parse_field)]
        field: Vec<(Field, bool)>,

        /// Do not warn about reserved item parents
        #[arg(long)]
        quiet_parent: bool,
    },

    /// Show information about a project snapshot
    Info {
        /// Project snapshot JSON
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Check whether a model JSON file can be opened with this format
    Check {
        /// Model JSON file
        model: PathBuf,
    },
}

fn parse_field(s: &str) -> Result<(Field, bool), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid field format: '{}'. Use key=true|false", s))?;
    let field = Field::from_key(key).ok_or_else(|| format!("Unknown field: '{}'", key))?;
    let include = value
        .parse::<bool>()
        .map_err(|_| format!("Invalid value for {}: '{}'", key, value))?;
    Ok((field, include))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input,
            output,
            settings,
            credit,
            no_names,
            no_groups,
            minify,
            field,
            quiet_parent,
        } => {
            let mut settings = match settings {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => ExportSettings::default(),
            };
            if let Some(credit) = credit {
                settings.credit = credit;
            }
            if no_names {
                settings.export_cube_names = false;
            }
            if no_groups {
                settings.export_groups = false;
            }
            if minify {
                settings.minified_output = true;
            }

            let mut options = CompileOptions::new();
            options.prevent_dialog = quiet_parent;
            for (field, include) in field {
                options = options.with_field(field, include);
            }

            compile_project(&input, output.as_deref(), &settings, &options)?;
        }
        Commands::Info { input } => {
            show_project_info(&input)?;
        }
        Commands::Check { model } => {
            let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&model)?)?;
            if accepts_model(&value) {
                println!("{:?} can be opened as an open model", model);
            } else {
                println!("{:?} is not a block model", model);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn compile_project(
    input: &Path,
    output: Option<&Path>,
    settings: &ExportSettings,
    options: &CompileOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Loading project from {:?}...", input);
    let project = load_project(input)?;
    eprintln!(
        "  Found {} cubes in {} groups, {} textures",
        project.cube_count(),
        project.group_count(),
        project.textures.len()
    );

    let codec = Codec::new();
    let text = codec.compile_text(&project, settings, options)?;

    match output {
        None => print!("{}", text),
        Some(path) => {
            let path = if path.is_dir() {
                path.join(model_file_name(&project))
            } else {
                path.to_path_buf()
            };
            fs::write(&path, &text)?;
            eprintln!("Exported model ({} bytes) to {:?}", text.len(), path);
        }
    }

    Ok(())
}

fn show_project_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let project = load_project(input)?;
    let meta = &project.meta;

    println!("Project Info:");
    if !meta.name.is_empty() {
        println!("  Name: {}", meta.name);
    }
    if !meta.parent.is_empty() {
        println!("  Parent: {}", meta.parent);
    }
    println!("  Texture size: {}x{}", meta.texture_width, meta.texture_height);
    println!("  Cubes: {}", project.cube_count());
    println!("  Groups: {}", project.group_count());
    println!("  Textures: {}", project.textures.len());
    for texture in &project.textures {
        let marker = if texture.particle { " (particle)" } else { "" };
        println!("    {} -> {}{}", texture.short_name(), texture.java_texture_link(), marker);
    }

    Ok(())
}

//! Outliner traversal.

use super::element::{CompiledElement, ElementEncoder};
use super::textures::TextureUsage;
use crate::project::SceneNode;

/// Maps source cube positions (depth-first outliner order, counting every
/// cube) to indices in the compiled element list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexLut {
    slots: Vec<Option<usize>>,
}

impl IndexLut {
    /// Output index of the `source`-th cube, if it was written.
    pub fn get(&self, source: usize) -> Option<usize> {
        self.slots.get(source).copied().flatten()
    }

    /// Number of source cubes seen.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn push(&mut self, index: Option<usize>) {
        self.slots.push(index);
    }
}

/// Everything the walk produces for the assembler.
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub elements: Vec<CompiledElement>,
    pub index_lut: IndexLut,
    pub textures_used: TextureUsage,
}

/// Visit every cube below `nodes` in depth-first order and encode it.
pub fn walk(nodes: &[SceneNode], encoder: &ElementEncoder<'_>) -> WalkOutput {
    let mut output = WalkOutput::default();
    visit(nodes, encoder, &mut output);
    log::debug!(
        "Compiled {} of {} cubes",
        output.elements.len(),
        output.index_lut.len()
    );
    output
}

fn visit(nodes: &[SceneNode], encoder: &ElementEncoder<'_>, output: &mut WalkOutput) {
    for node in nodes {
        match node {
            SceneNode::Group(group) => visit(&group.children, encoder, output),
            SceneNode::Cube(cube) => {
                if !cube.export {
                    output.index_lut.push(None);
                    continue;
                }
                let index = encoder
                    .encode(cube, &mut output.textures_used)
                    .map(|element| {
                        output.elements.push(element);
                        output.elements.len() - 1
                    });
                output.index_lut.push(index);
            }
            SceneNode::Unknown => {}
        }
    }
}

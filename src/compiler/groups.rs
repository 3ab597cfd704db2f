//! Group hierarchy summary.

use super::walker::IndexLut;
use crate::project::{Group, SceneNode};
use crate::types::Vec3;
use serde::Serialize;

/// One entry of the hierarchy: a compiled element index or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HierarchyNode {
    Element(usize),
    Group(GroupEntry),
}

/// A group as written to the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<bool>,
    pub origin: Vec3,
    pub color: u32,
    pub children: Vec<HierarchyNode>,
}

impl GroupEntry {
    fn from_group(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            shade: (!group.shade).then_some(false),
            origin: group.origin,
            color: group.color,
            children: Vec::new(),
        }
    }
}

/// Rebuild the outliner tree with cubes replaced by element indices.
///
/// Non-exported groups are left out together with their contents. Cubes
/// that produced no element are left out.
pub fn compile_groups(nodes: &[SceneNode], lut: &IndexLut) -> Vec<HierarchyNode> {
    let mut next_cube = 0;
    let mut result = Vec::new();
    iterate(nodes, lut, &mut next_cube, &mut result);
    result
}

fn iterate(
    nodes: &[SceneNode],
    lut: &IndexLut,
    next_cube: &mut usize,
    out: &mut Vec<HierarchyNode>,
) {
    for node in nodes {
        match node {
            SceneNode::Group(group) => {
                if !group.export {
                    *next_cube += count_cubes(&group.children);
                    continue;
                }
                let mut entry = GroupEntry::from_group(group);
                iterate(&group.children, lut, next_cube, &mut entry.children);
                out.push(HierarchyNode::Group(entry));
            }
            SceneNode::Cube(_) => {
                if let Some(index) = lut.get(*next_cube) {
                    out.push(HierarchyNode::Element(index));
                }
                *next_cube += 1;
            }
            SceneNode::Unknown => {}
        }
    }
}

fn count_cubes(nodes: &[SceneNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            SceneNode::Cube(_) => 1,
            SceneNode::Group(group) => count_cubes(&group.children),
            SceneNode::Unknown => 0,
        })
        .sum()
}

/// Compile the hierarchy and check it is well formed.
///
/// Returns `None` unless there is at least one top-level group and every
/// index points into the element list.
pub fn summarize(
    nodes: &[SceneNode],
    lut: &IndexLut,
    element_count: usize,
) -> Option<Vec<HierarchyNode>> {
    let hierarchy = compile_groups(nodes, lut);

    let has_group = hierarchy
        .iter()
        .any(|node| matches!(node, HierarchyNode::Group(_)));
    if !has_group || !indices_in_range(&hierarchy, element_count) {
        log::debug!("Skipping group hierarchy");
        return None;
    }
    Some(hierarchy)
}

fn indices_in_range(nodes: &[HierarchyNode], element_count: usize) -> bool {
    nodes.iter().all(|node| match node {
        HierarchyNode::Element(index) => *index < element_count,
        HierarchyNode::Group(group) => indices_in_range(&group.children, element_count),
    })
}

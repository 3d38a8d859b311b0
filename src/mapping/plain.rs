//! Plain text mapping persistence: one relation per line,
//! `sourcePath <tab> relationChar <tab> targetPath`.
//!
//! A path is the `\`-joined traversal of node names from the root, with a leading `\`;
//! a `\` occurring inside a node name is replaced by `/` so paths stay unambiguous.
//! The relation characters are those of [Relation::to_char].
//!
//! The loader is the renderer's counterpart: it resolves paths against the two contexts it is
//! given and stops at the first blank or `#`-prefixed line.
//! Lines naming unknown paths or malformed lines are logged and skipped rather than failing the
//! load.

use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use crate::{
    mapping::ContextMapping,
    misc::log::targets,
    structures::{
        relation::Relation,
        tree::{Context, NodeId},
    },
    types::err::MappingError,
};

/// The path of a node from the root, for mapping files.
pub fn path_to_root(context: &Context, node: NodeId) -> String {
    let mut segments = Vec::new();
    let mut at = Some(node);
    while let Some(id) = at {
        let n = context.node(id);
        if n.name().contains('\\') {
            log::debug!(target: targets::MAPPING, "replacing \\ in: {}", n.name());
            segments.push(n.name().replace('\\', "/"));
        } else {
            segments.push(n.name().to_string());
        }
        at = n.parent();
    }
    segments.reverse();
    let mut path = String::new();
    for segment in segments {
        path.push('\\');
        path.push_str(&segment);
    }
    path
}

fn path_map(context: &Context) -> HashMap<String, NodeId> {
    let mut map = HashMap::new();
    for id in context.nodes() {
        map.insert(path_to_root(context, id), id);
    }
    log::info!(target: targets::MAPPING, "created path hash for {} nodes", map.len());
    map
}

/// Writes a mapping, one element per line, in insertion order.
pub fn render(
    mapping: &ContextMapping,
    source: &Context,
    target: &Context,
    out: &mut impl Write,
) -> Result<(), MappingError> {
    for element in mapping {
        writeln!(
            out,
            "{}\t{}\t{}",
            path_to_root(source, element.source),
            element.relation.to_char(),
            path_to_root(target, element.target),
        )
        .map_err(|e| MappingError::Io(e.to_string()))?;
    }
    Ok(())
}

/// Reads a mapping written by [render] back against the given contexts.
pub fn load(
    source: &Context,
    target: &Context,
    reader: impl BufRead,
) -> Result<ContextMapping, MappingError> {
    let source_paths = path_map(source);
    let target_paths = path_map(target);

    let mut mapping = ContextMapping::new(source, target);

    for line in reader.lines() {
        let line = line.map_err(|e| MappingError::Io(e.to_string()))?;
        if line.is_empty() || line.starts_with('#') {
            break;
        }

        let tokens: Vec<&str> = line.split('\t').collect();
        if tokens.len() != 3 {
            log::warn!(target: targets::MAPPING, "unrecognized mapping format: {line}");
            continue;
        }

        let relation = match tokens[1].chars().next().and_then(Relation::from_char) {
            Some(relation) => relation,
            None => {
                log::warn!(target: targets::MAPPING, "unrecognized relation: {line}");
                continue;
            }
        };

        let source_node = source_paths.get(tokens[0]);
        if source_node.is_none() {
            log::warn!(target: targets::MAPPING, "could not find source node: {}", tokens[0]);
        }
        let target_node = target_paths.get(tokens[2]);
        if target_node.is_none() {
            log::warn!(target: targets::MAPPING, "could not find target node: {}", tokens[2]);
        }

        if let (Some(&s), Some(&t)) = (source_node, target_node) {
            mapping.set_relation(s, t, relation);
        }
    }

    log::info!(target: targets::MAPPING, "loaded {} relations", mapping.size());
    Ok(mapping)
}

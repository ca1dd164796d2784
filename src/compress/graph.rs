//! Object graph traversal helpers for the rewrite pipeline.
//!
//! lopdf exposes the document as a flat id -> object table plus a trailer;
//! pruning and reordering both need reference chasing over that table, and
//! reordering additionally needs every reference rewritten to a new id.

use std::collections::{HashMap, HashSet, VecDeque};

use lopdf::{Document, Object, ObjectId};

/// Append every object id referenced by `obj` to `queue`.
///
/// `skip_parent` leaves /Parent edges out, which keeps a traversal started
/// at one page from pulling in the whole page tree.
pub(crate) fn push_refs(obj: &Object, queue: &mut VecDeque<ObjectId>, skip_parent: bool) {
    match obj {
        Object::Reference(id) => queue.push_back(*id),
        Object::Array(items) => {
            for item in items {
                push_refs(item, queue, skip_parent);
            }
        }
        Object::Dictionary(dict) => {
            for (key, value) in dict.iter() {
                if skip_parent && key.as_slice() == b"Parent" {
                    continue;
                }
                push_refs(value, queue, skip_parent);
            }
        }
        Object::Stream(stream) => {
            for (key, value) in stream.dict.iter() {
                if skip_parent && key.as_slice() == b"Parent" {
                    continue;
                }
                push_refs(value, queue, skip_parent);
            }
        }
        _ => {}
    }
}

/// Breadth-first closure of `start`, in discovery order.
///
/// Ids already present in `out` count as visited, so callers can seed the
/// front of the ordering before expanding.
pub(crate) fn collect_closure(
    doc: &Document,
    start: ObjectId,
    out: &mut Vec<ObjectId>,
    skip_parent: bool,
) {
    let mut seen: HashSet<ObjectId> = out.iter().copied().collect();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if let Ok(obj) = doc.get_object(id) {
            out.push(id);
            push_refs(obj, &mut queue, skip_parent);
        }
    }
}

/// Rewrite every reference inside `obj` through `map`.
///
/// Dangling references (ids absent from the map) pass through unchanged.
pub(crate) fn remap_object(obj: Object, map: &HashMap<ObjectId, ObjectId>) -> Object {
    match obj {
        Object::Reference(id) => Object::Reference(map.get(&id).copied().unwrap_or(id)),
        Object::Array(items) => {
            Object::Array(items.into_iter().map(|o| remap_object(o, map)).collect())
        }
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = remap_object(value.clone(), map);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = remap_object(value.clone(), map);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}

/// Drop every object unreachable from the trailer. Returns the number of
/// objects removed.
///
/// Reachability is rooted at all trailer values, not just /Root, so the
/// information dictionary survives unless it was deliberately detached.
pub(crate) fn prune_unreachable(doc: &mut Document) -> usize {
    let mut reachable: HashSet<ObjectId> = HashSet::new();
    let mut queue = VecDeque::new();
    for (_, value) in doc.trailer.iter() {
        push_refs(value, &mut queue, false);
    }

    while let Some(id) = queue.pop_front() {
        if !reachable.insert(id) {
            continue;
        }
        if let Ok(obj) = doc.get_object(id) {
            push_refs(obj, &mut queue, false);
        }
    }

    let before = doc.objects.len();
    doc.objects.retain(|id, _| reachable.contains(id));
    before - doc.objects.len()
}

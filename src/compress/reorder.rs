//! Fast web view ordering.
//!
//! lopdf serializes the body in ascending object-id order, so renumbering
//! the catalog, the page tree root, and the first page's object closure to
//! the lowest ids places them at the front of the file. This is the
//! ordering half of linearization; hint tables are not produced.

use std::collections::HashMap;

use lopdf::{Document, Object, ObjectId};

use crate::compress::graph::{collect_closure, remap_object};
use crate::error::CompressError;

/// Renumber the document so the first page's objects serialize first.
///
/// Documents without pages are left as-is; everything else is renumbered
/// contiguously from 1, front matter first.
pub(crate) fn front_load_first_page(doc: &mut Document) -> Result<(), CompressError> {
    let root_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| CompressError::Rewrite("document has no catalog".to_string()))?;

    let first_page = match doc.get_pages().values().next().copied() {
        Some(id) => id,
        None => {
            log::debug!("document has no pages, skipping fast view ordering");
            return Ok(());
        }
    };

    // Front matter: catalog, page tree root, then the first page and
    // everything it references. /Parent edges are cut so the closure stays
    // on one page.
    let mut front = vec![root_id];
    if let Some(pages_root) = pages_root(doc, root_id) {
        if !front.contains(&pages_root) {
            front.push(pages_root);
        }
    }
    collect_closure(doc, first_page, &mut front, true);

    let mut mapping: HashMap<ObjectId, ObjectId> = HashMap::new();
    let mut next: u32 = 1;
    for id in front {
        if doc.objects.contains_key(&id) && !mapping.contains_key(&id) {
            mapping.insert(id, (next, 0));
            next += 1;
        }
    }
    let remaining: Vec<ObjectId> = doc.objects.keys().copied().collect();
    for id in remaining {
        if !mapping.contains_key(&id) {
            mapping.insert(id, (next, 0));
            next += 1;
        }
    }

    let old_objects = std::mem::take(&mut doc.objects);
    for (id, obj) in old_objects {
        doc.objects.insert(mapping[&id], remap_object(obj, &mapping));
    }
    for (_, value) in doc.trailer.iter_mut() {
        *value = remap_object(value.clone(), &mapping);
    }
    doc.max_id = next - 1;

    Ok(())
}

fn pages_root(doc: &Document, catalog_id: ObjectId) -> Option<ObjectId> {
    doc.get_object(catalog_id)
        .ok()?
        .as_dict()
        .ok()?
        .get(b"Pages")
        .ok()?
        .as_reference()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Stream};

    /// Two-page document numbered so the catalog and first page start out
    /// with the highest ids.
    fn backwards_doc() -> Document {
        let mut doc = Document::with_version("1.4");

        let pages_id = doc.new_object_id();

        let mut page_ids = Vec::new();
        // Second page first so the first page lands on a higher id.
        for text in ["second page", "first page"] {
            let content = format!("BT /F1 12 Tf 50 700 Td ({}) Tj ET", text);
            let content_id = doc.add_object(Object::Stream(Stream::new(
                Dictionary::new(),
                content.into_bytes(),
            )));
            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set("Contents", Object::Reference(content_id));
            page_ids.push(doc.add_object(Object::Dictionary(page_dict)));
        }
        // Kids in display order: the later-numbered page is page 1.
        page_ids.reverse();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(2));
        pages_dict.set(
            "Kids",
            Object::Array(page_ids.iter().map(|&id| Object::Reference(id)).collect()),
        );
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(Object::Dictionary(catalog));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc
    }

    #[test]
    fn test_front_matter_gets_lowest_ids() {
        let mut doc = backwards_doc();
        front_load_first_page(&mut doc).unwrap();

        let root_id = doc
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .unwrap();
        assert_eq!(root_id, (1, 0));

        let pages = doc.get_pages();
        let first_page = *pages.get(&1).unwrap();
        let second_page = *pages.get(&2).unwrap();
        assert!(first_page.0 < second_page.0);

        // Contiguous numbering from 1.
        assert_eq!(doc.max_id as usize, doc.objects.len());
        let max_key = doc.objects.keys().max().unwrap().0;
        assert_eq!(max_key, doc.max_id);
    }

    #[test]
    fn test_reordered_document_round_trips() {
        let mut doc = backwards_doc();
        front_load_first_page(&mut doc).unwrap();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        let reloaded = Document::load_mem(&bytes).unwrap();
        assert_eq!(reloaded.get_pages().len(), 2);
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let mut doc = Document::with_version("1.4");
        let result = front_load_first_page(&mut doc);
        assert!(result.is_err());
    }
}

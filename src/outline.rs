use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Finish, Name, Pdf, TextStr};

/// A flat list of bookmarks, shown by PDF readers as the document outline
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// 0-based position of the target page in the document's page order
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark<S: ToString>(&mut self, page_index: usize, title: S) {
        self.entries.push(OutlineEntry {
            page_index,
            title: title.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the outline root and its items. Page objects must already have refs.
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let outlines_id = refs.gen(RefType::Outlines);
        let item_ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
            outline.first(*first);
            outline.last(*last);
            outline.count(item_ids.len() as i32);
        }
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let mut item = writer.outline_item(item_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if let Some(next) = item_ids.get(i + 1) {
                item.next(*next);
            }
            if let Some(page) = refs.get(RefType::Page(entry.page_index)) {
                item.insert(Name(b"Dest"))
                    .array()
                    .item(page)
                    .item(Name(b"Fit"));
            }
        }
    }
}

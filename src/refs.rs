use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object the writer emits, keyed so that objects written
/// later (pages, outline entries) can point at objects written earlier
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Outlines,
    OutlineEntry(usize),
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    CidFont(usize),
    ToUnicode(usize),
    FontDescriptor(usize),
    FontData(usize),
}

/// Allocates object ids in ascending order, remembering which id each object got
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next: Ref,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next: Ref::new(1),
        }
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Allocate a fresh id for `ref_type`, replacing any previous allocation
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.next.bump();
        self.refs.insert(ref_type, id);
        id
    }
}

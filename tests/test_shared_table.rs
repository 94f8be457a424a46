//! Concurrent read access to a sealed name table.
//!
//! After construction the table is immutable, so parallel code-generation
//! workers share it by reference with no locking. This test drives lookups
//! from a rayon pool the way the emit phase does.

use rayon::prelude::*;
use schemac::{DescriptorKind, DescriptorSet, NameTable};

fn wide_schema(files: u32, messages_per_file: u32) -> DescriptorSet {
    let mut set = DescriptorSet::new();
    for f in 0..files {
        let file = set.add_file(format!("pkg{f}"));
        for m in 0..messages_per_file {
            let msg = set
                .add_child(&file, DescriptorKind::Message, format!("Msg{m}"))
                .unwrap();
            set.add_child(&msg, DescriptorKind::Enum, "Kind").unwrap();
        }
    }
    set
}

#[test]
fn test_table_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NameTable>();
}

#[test]
fn test_parallel_readers_resolve_every_name() {
    let set = wide_schema(8, 16);
    let table = NameTable::from_tree(&set).unwrap();
    assert_eq!(table.len(), 8 * 16 * 2);

    let names: Vec<String> = table.iter().map(|(n, _)| n.to_string()).collect();

    // Each worker resolves all names, both dot-free and leading-dot forms,
    // against the same shared table.
    names.par_iter().for_each(|name| {
        let descriptor = table.resolve_type_name(name).unwrap();
        assert_eq!(table.make_type_name(descriptor).unwrap().as_ref(), name);

        let dotted = format!(".{name}");
        assert_eq!(
            table.resolve_type_name(&dotted).unwrap().id(),
            descriptor.id()
        );
    });
}

#[test]
fn test_parallel_peeks_tolerate_misses() {
    let set = wide_schema(4, 4);
    let table = NameTable::from_tree(&set).unwrap();

    (0..64u32).into_par_iter().for_each(|i| {
        assert!(table.peek_type_name(&format!("pkg0.Nope{i}")).is_none());
        assert!(table.peek_type_name("pkg0.Msg0").is_some());
    });
}

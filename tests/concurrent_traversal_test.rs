//! A finished tree is immutable and can be shared between threads, each
//! running its own pass.

mod common;

use common::*;
use minijava_ast::*;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_nodes_are_send_and_sync() {
    assert_send_sync::<Located<Program>>();
    assert_send_sync::<Located<ClassDecl>>();
    assert_send_sync::<LocatedStmt>();
    assert_send_sync::<LocatedExpr>();
    assert_send_sync::<VarDecl>();
}

#[test]
fn test_scoped_threads_share_one_tree() {
    let program = counter_program();
    let expected = pretty_print(&program);

    thread::scope(|scope| {
        let printers: Vec<_> = (0..4).map(|_| scope.spawn(|| pretty_print(&program))).collect();
        let counter = scope.spawn(|| DeclarationCounter::count(&program));
        let checker = scope.spawn(|| DuplicateChecker::new().check_program(&program));

        for printer in printers {
            assert_eq!(printer.join().unwrap(), expected);
        }
        assert_eq!(counter.join().unwrap(), 3);
        assert_eq!(checker.join().unwrap(), Ok(()));
    });
}

#[test]
fn test_arc_shared_tree_across_spawned_threads() {
    let program = Arc::new(factorial_program());

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let program = Arc::clone(&program);
            thread::spawn(move || dump_tree(&*program, Config::default()))
        })
        .collect();

    let dumps: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(dumps.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(dumps[0].starts_with("Program\n"));
}

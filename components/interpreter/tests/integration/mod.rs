//! Integration tests for interpreter
//!
//! Tests interaction between VM, Scanner and module loaders

use core_types::{ErrorKind, Source};
use interpreter::{RunConfig, VM};
use scanner::{FsModuleLoader, MemoryModuleLoader};
use std::fs;
use tempfile::TempDir;

fn run_with(loader: MemoryModuleLoader, text: &str) -> (Vec<i64>, String) {
    let vm = VM::with_loader(loader);
    let mut out = Vec::new();
    let registers = vm
        .run_source(&Source::from_text("main.lmp", text), &mut out)
        .unwrap();
    (registers.into_vec(), String::from_utf8(out).unwrap())
}

/// Adds register 2 into register 1, leaving register 2 at zero.
const SOMA: &str = "R 1 0\nR 2 0\nC 2 top\nP body\nP end\n- 2 body\n+ 1\nP top\nF end\n";

#[test]
fn test_module_call_adds() {
    let loader = MemoryModuleLoader::new().with_module("soma", SOMA);
    let (registers, _) = run_with(loader, "R 1 2\nR 2 3\n. soma(1,2)\nE 1\nF\n");
    assert_eq!(registers, vec![0, 5, 0]);
}

#[test]
fn test_module_isolation() {
    // register 2 of the module is local: it is not bound to an argument
    let loader = MemoryModuleLoader::new().with_module("m", "R 1 0\nR 2 0\n+ 2\n+ 2\n+ 1\nF\n");
    let (registers, _) = run_with(loader, "R 1 0\nR 2 40\n. m(1)\nF\n");
    assert_eq!(registers, vec![0, 1, 40]);
}

#[test]
fn test_module_accumulator_copied_back() {
    let loader = MemoryModuleLoader::new().with_module("m", "R 1 0\n+ 0\n+ 0\nF\n");
    let (registers, _) = run_with(loader, "R 1 0\n. m(1)\nF\n");
    assert_eq!(registers, vec![2, 0]);
}

#[test]
fn test_module_accumulator_starts_at_zero() {
    let loader = MemoryModuleLoader::new().with_module("m", "R 1 0\nE 0\nF\n");
    let (registers, out) = run_with(loader, "R 1 0\n+ 0\n. m(1)\nF\n");
    assert_eq!(out, "Registrador 0: 0\n");
    assert_eq!(registers, vec![0, 0]);
}

#[test]
fn test_nested_modules() {
    let loader = MemoryModuleLoader::new()
        .with_module("soma", SOMA)
        .with_module("dobro", "R 1 0\nR 2 0\n. soma(2,1)\n. soma(1,2)\nF\n");
    // dobro moves its first argument into the second and back again
    let (registers, _) = run_with(loader, "R 1 4\nR 2 0\n. dobro(1,2)\nF\n");
    assert_eq!(registers, vec![0, 4, 0]);
}

#[test]
fn test_module_print_goes_to_same_output() {
    let loader = MemoryModuleLoader::new().with_module("show", "R 1 0\nE 1\nF\n");
    let (_, out) = run_with(loader, "R 1 9\n. show(1)\nE 1\nF\n");
    assert_eq!(out, "Registrador 1: 9\nRegistrador 1: 9\n");
}

#[test]
fn test_modules_are_rescanned_each_call() {
    let loader = MemoryModuleLoader::new().with_module("inc", "R 1 0\n+ 1\nF\n");
    let (registers, _) = run_with(loader, "R 1 0\n. inc(1)\n. inc(1)\n. inc(1)\nF\n");
    assert_eq!(registers, vec![0, 3]);
}

#[test]
fn test_recursive_module_hits_depth_limit() {
    let loader = MemoryModuleLoader::new().with_module("loop", "R 1 0\n. loop(1)\nF\n");
    let vm = VM::with_loader(loader).with_config(RunConfig::default().with_max_call_depth(8));
    let err = vm
        .run_source(&Source::from_text("main.lmp", "R 1 0\n. loop(1)\nF\n"), &mut std::io::sink())
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CallDepthExceeded);
    assert_eq!(err.traceback.len(), 8);
    assert_eq!(err.traceback[0].origin, "main.lmp");
    assert_eq!(err.traceback[1].origin, "loop.lmm");
}

#[test]
fn test_default_depth_limit_is_reported() {
    let loader = MemoryModuleLoader::new().with_module("loop", "R 1 0\n. loop(1)\nF\n");
    let vm = VM::with_loader(loader);
    let err = vm
        .run_source(&Source::from_text("main.lmp", "R 1 0\n. loop(1)\nF\n"), &mut std::io::sink())
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CallDepthExceeded);
    assert_eq!(err.traceback.len(), interpreter::DEFAULT_MAX_CALL_DEPTH);
}

#[test]
fn test_error_in_module_scan_has_traceback() {
    let loader = MemoryModuleLoader::new().with_module("bad", "R 1 0\nR 3 0\nF\n");
    let vm = VM::with_loader(loader);
    let err = vm
        .run_source(&Source::from_text("main.lmp", "R 1 0\n. bad(1)\nF\n"), &mut std::io::sink())
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::OrderError);
    assert_eq!(err.line.origin, "bad.lmm");
    assert_eq!(err.line.number, 2);
    assert_eq!(err.traceback.len(), 1);
    assert_eq!(err.traceback[0].text, ". bad(1)");
}

#[test]
fn test_run_file_with_module_directory() {
    let dir = TempDir::new().unwrap();
    let modules = dir.path().join("modules");
    fs::create_dir(&modules).unwrap();
    fs::write(modules.join("soma.lmm"), SOMA).unwrap();
    let main = dir.path().join("main.lmp");
    fs::write(&main, "R 1 10\nR 2 5\n. soma(1,2)\nF\n").unwrap();

    let vm = VM::with_loader(FsModuleLoader::new(&modules));
    let registers = vm.run_file(&main, &mut std::io::sink()).unwrap();
    assert_eq!(registers.as_slice(), &[0, 15, 0]);
}

#[test]
fn test_run_file_missing() {
    let dir = TempDir::new().unwrap();
    let vm = VM::with_loader(FsModuleLoader::new(dir.path()));
    let err = vm
        .run_file(dir.path().join("absent.lmp"), &mut std::io::sink())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn test_module_removed_after_scan() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("m.lmm"), "R 1 0\nF\n").unwrap();
    let vm = VM::with_loader(FsModuleLoader::new(dir.path()));
    let program = vm
        .scan(&Source::from_text("main.lmp", "R 1 0\n. m(1)\nF\n"))
        .unwrap();

    fs::remove_file(dir.path().join("m.lmm")).unwrap();
    let err = vm.execute(program, &mut std::io::sink()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ModuleNotFound);
}

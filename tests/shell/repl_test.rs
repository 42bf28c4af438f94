/*!
 * REPL Tests
 * Scripted sessions over in-memory buffers
 */

use memsim::memory::MemoryManager;
use memsim::shell::Repl;
use std::io::Cursor;

fn run_script(script: &str) -> (String, MemoryManager) {
    let mut repl = Repl::new(MemoryManager::new());
    let mut out = Vec::new();
    repl.run(Cursor::new(script.to_string()), &mut out)
        .expect("in-memory I/O cannot fail");
    let text = String::from_utf8(out).expect("shell output is UTF-8");
    (text, repl.into_inner())
}

#[test]
fn scripted_session_walks_the_happy_path() {
    let (out, manager) = run_script(
        "init 64\n\
         alloc 10 first\n\
         alloc 8 first\n\
         freeid 1\n\
         alloc 6 best\n\
         show\n\
         stats\n\
         exit\n",
    );

    assert!(out.contains("Memory initialized with 64 bytes."));
    assert!(out.contains("Allocated block 1: 10 bytes at @0 (first-fit)"));
    assert!(out.contains("Allocated block 2: 8 bytes at @10 (first-fit)"));
    assert!(out.contains("Block 1 freed."));
    assert!(out.contains("Allocated block 3: 6 bytes at @0 (best-fit)"));
    assert!(out.contains("Memory map (64 bytes)"));
    assert!(out.contains("Used: 14 bytes | Free: 50 bytes"));
    assert!(out.contains("Leaving simulator."));

    let stats = manager.stats().expect("region stays initialized");
    assert_eq!(stats.used_space, 14);
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let (out, _) = run_script(
        "alloc 10 first\n\
         bogus\n\
         init 0\n\
         init 16\n\
         alloc 32 first\n\
         freeid 7\n\
         exit\n",
    );

    assert!(out.contains("error: memory not initialized, run init first"));
    assert!(out.contains("error: unknown command 'bogus'"));
    assert!(out.contains("error: invalid capacity: 0 bytes"));
    assert!(out.contains("Memory initialized with 16 bytes."));
    assert!(out.contains("error: out of memory: requested 32 bytes"));
    assert!(out.contains("error: no allocated block with id 7"));
    assert!(out.contains("Leaving simulator."));
}

#[test]
fn blank_lines_are_ignored() {
    let (out, _) = run_script("\n   \ninit 8\n\nexit\n");
    assert!(out.contains("Memory initialized with 8 bytes."));
}

#[test]
fn end_of_input_terminates_without_exit() {
    let (out, _) = run_script("init 8\n");
    assert!(out.contains("Memory initialized with 8 bytes."));
    assert!(!out.contains("Leaving simulator."));
}

#[test]
fn quit_is_an_alias_for_exit() {
    let (out, _) = run_script("quit\n");
    assert!(out.contains("Leaving simulator."));
}

#[test]
fn dump_emits_json_for_the_snapshot() {
    let (out, _) = run_script("init 16\nalloc 4 first\ndump\nexit\n");

    let json_start = out.find('{').expect("dump output contains JSON");
    let json_end = out.rfind('}').expect("dump output contains JSON");
    let snapshot: serde_json::Value =
        serde_json::from_str(&out[json_start..=json_end]).expect("dump output parses as JSON");

    assert_eq!(snapshot["capacity"], 16);
    assert_eq!(snapshot["blocks"][0]["id"], 1);
    assert_eq!(snapshot["blocks"][0]["size"], 4);
    assert_eq!(snapshot["blocks"][1]["id"], serde_json::Value::Null);
}

#[test]
fn help_lists_the_commands() {
    let (out, _) = run_script("help\nexit\n");
    for command in ["init", "alloc", "freeid", "freeaddr", "show", "stats", "dump"] {
        assert!(out.contains(command), "help is missing '{}'", command);
    }
}

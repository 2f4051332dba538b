//! Plain-text rendering of the machine state.
//!
//! Lays out the register and disassembly panels as line output.

use alusim_core::common::MEMORY_SIZE;
use alusim_core::core::Snapshot;
use alusim_core::isa::disassemble;
use alusim_core::sim::Response;

/// Rows of disassembly shown around the program counter.
const WINDOW: usize = 8;

/// Prints the outcome of a command.
pub fn response(response: &Response) {
    match response {
        Response::Stepped(info) => {
            let end = if info.at_end { "  (end of memory)" } else { "" };
            println!(
                "0x{:02x}  {:<18} r{} = 0x{:02x}{end}",
                info.pc,
                disassemble(info.raw),
                info.register_index,
                info.result
            );
        }
        Response::Running(true) => println!("running"),
        Response::Running(false) => println!("paused"),
        Response::Reset(undone) => println!("reset ({undone} step(s) undone)"),
        Response::Undone(true) => println!("stepped back"),
        Response::Undone(false) => println!("nothing to undo"),
        Response::Loaded(bytes) => println!("loaded {bytes} byte(s)"),
        Response::Set { address, byte } => {
            println!("0x{address:02x} <- 0x{byte:02x}  {}", disassemble(*byte));
        }
        Response::Snapshot(snap) => snapshot(snap),
        Response::Json(json) => println!("{json}"),
        Response::Stats(stats) => println!("{}", stats.summary()),
        Response::Quit => {}
    }
}

/// Prints registers, pc, and the disassembly window.
pub fn snapshot(snap: &Snapshot) {
    println!(" REGISTERS");
    for (i, value) in snap.registers.iter().enumerate() {
        println!(" ${i}\t 0x{value:02x}");
    }
    let state = if snap.running { "running" } else { "idle" };
    println!(" $pc\t 0x{:02x}   [{state}]", snap.pc);

    println!(" DISASSEMBLY");
    let pc = snap.pc as usize;
    let start = pc.saturating_sub(WINDOW / 2).min(MEMORY_SIZE - WINDOW);
    for addr in start..start + WINDOW {
        let byte = snap.memory[addr];
        let marker = if addr == pc { '>' } else { ' ' };
        println!("{marker}0x{addr:02x}   0x{byte:02x}   {}", disassemble(byte));
    }
}

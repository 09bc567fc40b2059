//! interactive command shell over the VM table
//!
//! the loop alternates between waiting for a line and dispatching it. there is
//! no exit command: the loop ends on an interrupt or when input runs out.
//! input lines and interrupts both arrive over channels so a pending ctrl-c
//! never waits behind a blocking stdin read.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::thread;

use crossbeam_channel::{Receiver, never, select, unbounded};
use log::debug;

use crate::render::render_listing;
use crate::table::VmTable;

pub const PROMPT: &str = "esxi> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `ls` or `ls -al`
    List { verbose: bool },
    /// anything else, echoed back as its tokens
    Echo(Vec<String>),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["ls"] => Command::List { verbose: false },
            ["ls", "-al"] => Command::List { verbose: true },
            _ => Command::Echo(tokens.iter().map(|t| t.to_string()).collect()),
        }
    }
}

/// why the shell loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Interrupted,
    EndOfInput,
}

pub struct Shell<'a> {
    table: &'a VmTable,
    // general purpose key/value space, not read by any command yet
    scratch: HashMap<String, String>,
}

impl<'a> Shell<'a> {
    pub fn new(table: &'a VmTable) -> Self {
        Self {
            table,
            scratch: HashMap::new(),
        }
    }

    pub fn scratch(&self) -> &HashMap<String, String> {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.scratch
    }

    /// parse one input line and write its output
    pub fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        match Command::parse(line) {
            Command::List { verbose } => {
                for vm in self.table.iter() {
                    out.write_all(render_listing(vm, verbose).as_bytes())?;
                }
            }
            Command::Echo(tokens) => writeln!(out, "{:?}", tokens)?,
        }
        out.flush()
    }

    /// prompt/dispatch loop until interrupted or input closes
    pub fn run<W: Write>(
        &mut self,
        lines: &Receiver<String>,
        interrupts: &Receiver<()>,
        out: &mut W,
    ) -> io::Result<ShellExit> {
        let never_rx = never();
        let mut interrupts: &Receiver<()> = interrupts;
        loop {
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;

            let line = loop {
                let signal_rx = interrupts;
                select! {
                    recv(signal_rx) -> signal => match signal {
                        Ok(()) => return Ok(ShellExit::Interrupted),
                        // handler is gone, stop listening for it
                        Err(_) => interrupts = &never_rx,
                    },
                    recv(lines) -> line => break line,
                }
            };

            match line {
                Ok(line) => self.dispatch(&line, out)?,
                Err(_) => {
                    writeln!(out)?;
                    return Ok(ShellExit::EndOfInput);
                }
            }
        }
    }
}

/// read stdin line by line on a background thread
pub fn stdin_lines() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("stdin closed");
    });
    rx
}

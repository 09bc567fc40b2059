//! text rendering of VM summaries

use std::fmt::Write;

use crate::inventory::VmSummary;

/// full status block, as printed by `dump`
pub fn render_summary(vm: &VmSummary) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "Name       : {}", vm.name);
    let _ = writeln!(out, "Path       : {}", vm.path);
    let _ = writeln!(out, "Guest      : {}", vm.guest_os);
    let _ = writeln!(out, "UUID       : {}", vm.uuid);
    if let Some(annotation) = non_blank(&vm.annotation) {
        let _ = writeln!(out, "Annotation : {}", annotation);
    }
    let _ = writeln!(out, "State      : {}", vm.power_state);
    if let Some(ip) = non_blank(&vm.ip_address) {
        let _ = writeln!(out, "IP         : {}", ip);
    }
    if let Some(question) = &vm.question {
        let _ = writeln!(out, "Question   : {}", question);
    }
    out.push('\n');
    out
}

/// one `ls` entry; verbose adds guest and uuid lines and a blank separator
pub fn render_listing(vm: &VmSummary, verbose: bool) -> String {
    let mut out = format!("Name : {}\n", vm.name);
    if verbose {
        let _ = writeln!(out, "Guest : {}", vm.guest_os);
        let _ = writeln!(out, "UUID : {}", vm.uuid);
        out.push('\n');
    }
    out
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

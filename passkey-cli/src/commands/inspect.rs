//! Inspect command implementation.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use passkey_core::Device;
use tracing::info;

use crate::utils::{format_timestamp, load_export};

/// Execute the inspect command.
pub fn execute(file: PathBuf, quiet: bool) -> Result<()> {
    let (export, _) = load_export(&file)?;

    info!(path = %file.display(), devices = export.len(), "Inspected export");

    if quiet {
        return Ok(());
    }

    println!();
    println!(
        "{} {}",
        "Devices in export:".bold(),
        export.len().to_string().bold()
    );

    for (index, device) in export.webauthn_devices.iter().enumerate() {
        print_device(index + 1, device);
    }

    Ok(())
}

fn print_device(number: usize, device: &Device) {
    let rpid = if device.rpid.is_empty() {
        "(assigned on next sign-in)".yellow().to_string()
    } else {
        device.rpid.clone()
    };

    let last_used = device
        .last_used()
        .map(|ts| format_timestamp(&ts))
        .unwrap_or_else(|| "never".to_string());

    let aaguid = device
        .aaguid
        .get()
        .map(|aaguid| aaguid.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let transport = if device.transport.is_empty() {
        "-".to_string()
    } else {
        device.transport.clone()
    };

    println!();
    println!("{}", format!("#{number} {}", device.description).green().bold());
    println!("   {} {}", "Username:".dimmed(), device.username);
    println!("   {} {}", "RPID:".dimmed(), rpid);
    println!("   {} {}", "KID:".dimmed(), device.kid);
    println!("   {} {}", "Attestation:".dimmed(), device.attestation_type);
    println!("   {} {}", "Transport:".dimmed(), transport);
    println!("   {} {}", "AAGUID:".dimmed(), aaguid);
    println!("   {} {}", "Sign count:".dimmed(), device.sign_count);
    println!(
        "   {} {}",
        "Created:".dimmed(),
        format_timestamp(&device.created_at)
    );
    println!("   {} {}", "Last used:".dimmed(), last_used);

    if device.clone_warning {
        println!("   {}", "Clone warning raised".red().bold());
    }
}

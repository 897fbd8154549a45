//! Default invocation — greeting and platform report.

use anyhow::{bail, Result};

use hostinfo_platform::{support, HostInfo, SupportTier};

/// Print the platform report in the requested format.
pub fn run(format: Option<&str>) -> Result<()> {
    let host = HostInfo::detect();

    match format {
        Some("json") => {
            println!("{}", serde_json::to_string_pretty(&host)?);
        }
        Some("text") | None => print_report(&host),
        Some(other) => bail!("unknown report format: '{other}'. Choose: text, json"),
    }

    Ok(())
}

fn print_report(host: &HostInfo) {
    println!("Hello from hostinfo {}!", env!("CARGO_PKG_VERSION"));
    println!("OS:           {}", host.os);
    println!("Architecture: {}", host.arch);
    println!("Toolchain:    {}", host.toolchain);

    // Advisory only; the exit code is unaffected.
    if support::os_support(&host.os) == SupportTier::Unknown {
        println!("warning: OS {} might not be officially supported", host.os);
    }
    if support::arch_support(&host.arch) == SupportTier::Unknown {
        println!(
            "warning: architecture {} might not be officially supported",
            host.arch
        );
    }

    println!();
    println!("Run 'hostinfo test' to execute the self-check battery.");
}

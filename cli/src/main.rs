mod commands;
mod terminal;

use commands::{CommandLine, Commands, ports, subdomains, sweep};
use sweepr_common::config::ProbeKind;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);
    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match &commands.command {
        Commands::Sweep { targets, handshake } => {
            print::header("ping sweep", cfg.quiet);
            let scan_cfg = commands.scan_config(ProbeKind::Liveness);
            sweep::sweep(targets, *handshake, scan_cfg, &cfg).await
        }
        Commands::Ports {
            target,
            ports: port_spec,
            banner,
        } => {
            print::header("port scan", cfg.quiet);
            let scan_cfg = commands.scan_config(ProbeKind::PortConnect);
            let banner_cfg = banner.then(|| commands.scan_config(ProbeKind::Banner));
            ports::ports(*target, port_spec, scan_cfg, banner_cfg, &cfg).await
        }
        Commands::Subdomains { domain, wordlist } => {
            print::header("subdomain brute force", cfg.quiet);
            let scan_cfg = commands.scan_config(ProbeKind::Subdomain);
            subdomains::subdomains(domain, wordlist, scan_cfg, &cfg).await
        }
    };

    print::end_of_program(cfg.quiet);
    result
}

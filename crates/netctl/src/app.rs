use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("netctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and remove local network resources")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("network")
                .about("Manage networks")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("rm")
                        .visible_alias("remove")
                        .about("Remove one or more networks")
                        .arg(
                            Arg::new("networks")
                                .value_name("NETWORK")
                                .help("Network name or ID")
                                .required(true)
                                .num_args(1..)
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("ls")
                        .visible_alias("list")
                        .about("List networks")
                        .arg(
                            Arg::new("quiet")
                                .long("quiet")
                                .short('q')
                                .help("Only display network IDs")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("json")
                        )
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(
                    Command::new("inspect")
                        .about("Display detailed information on one or more networks")
                        .arg(
                            Arg::new("networks")
                                .value_name("NETWORK")
                                .help("Network name or ID")
                                .required(true)
                                .num_args(1..)
                                .index(1)
                        )
                )
                .subcommand(
                    Command::new("prune")
                        .about("Remove all unused networks")
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .short('f')
                                .help("Do not prompt for confirmation")
                                .action(ArgAction::SetTrue)
                        )
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_matches(args: &[&str]) -> clap::ArgMatches {
        let mut argv = vec!["netctl", "network"];
        argv.extend_from_slice(args);
        let matches = build_cli().try_get_matches_from(argv).unwrap();
        matches.subcommand_matches("network").unwrap().clone()
    }

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "netctl");
    }

    #[test]
    fn test_cli_rm_multiple_networks() {
        let network = network_matches(&["rm", "foo", "bar"]);
        let rm_matches = network.subcommand_matches("rm").unwrap();
        let networks: Vec<&String> = rm_matches.get_many::<String>("networks").unwrap().collect();
        assert_eq!(networks, vec!["foo", "bar"]);
    }

    #[test]
    fn test_cli_remove_alias() {
        let network = network_matches(&["remove", "foo"]);
        let (name, sub) = network.subcommand().unwrap();
        assert_eq!(name, "rm");
        assert_eq!(sub.get_one::<String>("networks").unwrap(), "foo");
    }

    #[test]
    fn test_cli_rm_requires_network() {
        let matches = build_cli().try_get_matches_from(vec!["netctl", "network", "rm"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_ls_flags() {
        let network = network_matches(&["list", "-q"]);
        let (name, sub) = network.subcommand().unwrap();
        assert_eq!(name, "ls");
        assert!(sub.get_flag("quiet"));
        assert!(!sub.get_flag("json"));
    }

    #[test]
    fn test_cli_ls_quiet_conflicts_with_json() {
        let matches =
            build_cli().try_get_matches_from(vec!["netctl", "network", "ls", "-q", "--json"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_inspect_requires_network() {
        let matches = build_cli().try_get_matches_from(vec!["netctl", "network", "inspect"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_prune_force() {
        let network = network_matches(&["prune", "--force"]);
        assert!(network.subcommand_matches("prune").unwrap().get_flag("force"));
    }

    #[test]
    fn test_cli_verbose_flag_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(vec!["netctl", "network", "rm", "foo", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_default_false() {
        let matches = build_cli()
            .try_get_matches_from(vec!["netctl", "network", "ls"])
            .unwrap();
        assert!(!matches.get_flag("verbose"));
    }
}

//! Full usage texts for realistic commands.

use usagefmt::{
    Column, CommandConfig, CommandSpec, Help, Layout, MinimalOptionRenderer,
    MinimalParameterRenderer, MinimalValueLabelRenderer, OptionDescriptor, OptionOrder,
    PackedPlacement, ParameterDescriptor, Range, TextTable,
};

fn lines(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

fn switch(name: &str, description: &str) -> OptionDescriptor {
    OptionDescriptor::switch([name]).description(description)
}

// ============================================================================
// Default layout
// ============================================================================

#[test]
fn required_option_with_default_value() {
    let config = CommandConfig::default();
    let options = vec![OptionDescriptor::new(["-f", "--file"])
        .required(true)
        .description("the file to use")
        .default_value("theDefault.txt")];
    assert_eq!(
        Help::new(&config, &options, &[]).usage().unwrap(),
        lines(&[
            "Usage: <main class> -f=<file>",
            "  -f, --file=<file>           the file to use",
            "                              Default: theDefault.txt",
        ])
    );
}

#[test]
fn cat_abbreviated_usage() {
    let config = CommandConfig::new("cat")
        .abbreviate_synopsis(true)
        .description("Concatenate FILE(s), or standard input, to standard output.")
        .footer("Copyright(c) 2017");
    let options = vec![
        OptionDescriptor::switch(["--help"])
            .usage_help(true)
            .description("display this help and exit"),
        OptionDescriptor::switch(["--version"])
            .usage_help(true)
            .description("output version information and exit"),
        switch("-u", "(ignored)"),
        switch("-t", "equivalent to -vT"),
        switch("-e", "equivalent to -vET"),
        OptionDescriptor::switch(["-A", "--show-all"]).description("equivalent to -vET"),
        OptionDescriptor::switch(["-s", "--squeeze-blank"])
            .description("suppress repeated empty output lines"),
        OptionDescriptor::switch(["-v", "--show-nonprinting"])
            .description("use ^ and M- notation, except for LDF and TAB"),
        OptionDescriptor::switch(["-b", "--number-nonblank"])
            .description("number nonempty output lines, overrides -n"),
        OptionDescriptor::switch(["-T", "--show-tabs"]).description("display TAB characters as ^I"),
        OptionDescriptor::switch(["-E", "--show-ends"]).description("display $ at end of each line"),
        OptionDescriptor::switch(["-n", "--number"]).description("number all output lines"),
    ];
    let parameters = vec![ParameterDescriptor::new("files")
        .value_label("FILE")
        .arity(Range::at_least(0))
        .description("Files whose contents to display")];

    assert_eq!(
        Help::new(&config, &options, &parameters).usage().unwrap(),
        lines(&[
            "Usage: cat [OPTIONS] [FILE...]",
            "Concatenate FILE(s), or standard input, to standard output.",
            "  -A, --show-all              equivalent to -vET",
            "  -b, --number-nonblank       number nonempty output lines, overrides -n",
            "  -e                          equivalent to -vET",
            "  -E, --show-ends             display $ at end of each line",
            "  -n, --number                number all output lines",
            "  -s, --squeeze-blank         suppress repeated empty output lines",
            "  -t                          equivalent to -vT",
            "  -T, --show-tabs             display TAB characters as ^I",
            "  -u                          (ignored)",
            "  -v, --show-nonprinting      use ^ and M- notation, except for LDF and TAB",
            "      --help                  display this help and exit",
            "      --version               output version information and exit",
            "      FILE                    Files whose contents to display",
            "Copyright(c) 2017",
        ])
    );
}

#[test]
fn indexed_positional_parameters() {
    let config = CommandConfig::default().show_default_values(false);
    let parameters = vec![
        ParameterDescriptor::new("host1")
            .index(Range::exactly(0))
            .description("source host"),
        ParameterDescriptor::new("port1")
            .index(Range::exactly(1))
            .description("source port"),
        ParameterDescriptor::new("host2")
            .index(Range::exactly(2))
            .description("destination host"),
        ParameterDescriptor::new("port2range")
            .index(Range::between(3, 4).unwrap())
            .arity(Range::between(1, 2).unwrap())
            .description("destination port range"),
        ParameterDescriptor::new("files")
            .index(Range::at_least(4))
            .arity(Range::at_least(0))
            .description("files to transfer"),
        ParameterDescriptor::new("all")
            .arity(Range::at_least(0))
            .hidden(true)
            .show_in_synopsis(false),
    ];
    assert_eq!(
        Help::new(&config, &[], &parameters).usage().unwrap(),
        lines(&[
            "Usage: <main class> <host1> <port1> <host2> <port2range> [<port2range>] [<files>...]",
            "      host1                   source host",
            "      port1                   source port",
            "      host2                   destination host",
            "      port2range              destination port range",
            "      files                   files to transfer",
        ])
    );
}

#[test]
fn long_synopsis_wraps_under_first_token() {
    let config = CommandConfig::new("<best-app-ever>");
    let options = vec![
        OptionDescriptor::new(["--long-option-name"]).value_label("<long-option-value>"),
        OptionDescriptor::new(["--another-long-option-name"])
            .value_label("<another-long-option-value>"),
        OptionDescriptor::new(["--third-long-option-name"]).value_label("<third-long-option-value>"),
        OptionDescriptor::new(["--fourth-long-option-name"])
            .value_label("<fourth-long-option-value>"),
    ];
    let help = Help::new(&config, &options, &[]);
    assert_eq!(
        help.detailed_synopsis(OptionOrder::ShortestName, true),
        lines(&[
            "<best-app-ever> [--another-long-option-name=<another-long-option-value>]",
            "                [--fourth-long-option-name=<fourth-long-option-value>]",
            "                [--long-option-name=<long-option-value>]",
            "                [--third-long-option-name=<third-long-option-value>]",
        ])
    );
    // declaration order is kept by the plain synopsis
    assert!(help
        .synopsis()
        .starts_with("<best-app-ever> [--long-option-name=<long-option-value>]\n"));
}

#[test]
fn custom_synopsis_in_usage() {
    let config = CommandConfig::default().custom_synopsis([
        "<the-app> --number=NUMBER --other-option=<aargh>",
        "          --more=OTHER --and-other-option=<aargh>",
        "<the-app> --number=NUMBER --and-other-option=<aargh>",
    ]);
    let options = vec![OptionDescriptor::switch(["--ignored"])];
    let help = Help::new(&config, &options, &[]);
    assert_eq!(
        help.synopsis(),
        lines(&[
            "<the-app> --number=NUMBER --other-option=<aargh>",
            "          --more=OTHER --and-other-option=<aargh>",
            "<the-app> --number=NUMBER --and-other-option=<aargh>",
        ])
    );
    assert!(help
        .usage()
        .unwrap()
        .starts_with("Usage: <the-app> --number=NUMBER --other-option=<aargh>\n"));
}

#[test]
fn synopsis_with_labeled_required_parameters() {
    let config = CommandConfig::default();
    let options = vec![
        OptionDescriptor::switch(["--verbose", "-v"]),
        OptionDescriptor::new(["--count", "-c"]),
        OptionDescriptor::switch(["--help", "-h"]).hidden(true),
    ];
    let parameters = vec![ParameterDescriptor::new("files")
        .value_label("FILE")
        .arity(Range::at_least(1))];
    assert_eq!(
        Help::new(&config, &options, &parameters).synopsis(),
        "<main class> [-v] [-c=<count>] FILE [FILE...]\n"
    );
}

#[test]
fn required_flags_cluster() {
    let config = CommandConfig::default();
    let options = vec![
        OptionDescriptor::switch(["--verbose", "-v"]).required(true),
        OptionDescriptor::switch(["--aaaa", "-a"]).required(true),
        OptionDescriptor::switch(["--xxxx", "-x"]).required(true),
        OptionDescriptor::new(["--count", "-c"]).value_label("COUNT"),
    ];
    assert_eq!(
        Help::new(&config, &options, &[]).synopsis(),
        "<main class> -avx [-c=COUNT]\n"
    );
}

// ============================================================================
// Custom tables and placements
// ============================================================================

#[test]
fn zip_two_options_per_row() {
    let config = CommandConfig::default()
        .description("Copyright (c) 1990-2008 Info-ZIP - Type 'zip \"-L\"' for software license.")
        .description("Zip 3.0 (July 5th 2008). Command:")
        .description("zip [-options] [-b path] [-t mmddyyyy] [-n suffixes] [zipfile list] [-xi list]")
        .description("  The default action is to add or replace zipfile entries from list, which")
        .description("  can include the special name - to compress standard input.")
        .description("  If zipfile and list are omitted, zip compresses stdin to stdout.");
    let options = vec![
        switch("-f", "freshen: only changed files"),
        switch("-u", "update: only changed or new files"),
        switch("-d", "delete entries in zipfile"),
        switch("-m", "move into zipfile (delete OS files)"),
        switch("-r", "recurse into directories"),
        switch("-j", "junk (don't record) directory names"),
        switch("-0", "store only"),
        switch("-l", "convert LF to CR LF (-ll CR LF to LF)"),
        switch("-1", "compress faster"),
        switch("-9", "compress better"),
        switch("-q", "quiet operation"),
        switch("-v", "verbose operation/print version info"),
        switch("-c", "add one-line comments"),
        switch("-z", "add zipfile comment"),
        switch("-@", "read names from stdin"),
        switch("-o", "make zipfile as old as latest entry"),
        switch("-x", "exclude the following names"),
        switch("-i", "include only the following names"),
        switch("-F", "fix zipfile (-FF try harder)"),
        switch("-D", "do not add directory entries"),
        switch("-A", "adjust self-extracting exe"),
        switch("-J", "junk zipfile prefix (unzipsfx)"),
        switch("-T", "test zipfile integrity"),
        switch("-X", "eXclude eXtra file attributes"),
        switch("-y", "store symbolic links as the link instead of the referenced file"),
        switch("-e", "encrypt"),
        switch("-n", "don't compress these suffixes"),
        switch("-h2", "show more help"),
    ];
    let help = Help::new(&config, &options, &[]);

    let table = TextTable::new(vec![
        Column::truncate(5, 2),
        Column::span(30, 2),
        Column::truncate(4, 1),
        Column::wrap(39, 2),
    ])
    .unwrap();
    let layout = Layout::new(table, MinimalOptionRenderer, MinimalParameterRenderer)
        .with_placement(PackedPlacement::default());
    let text = help.description()
        + &help
            .option_list_with(layout, OptionOrder::Declared, &help.value_label_renderer())
            .unwrap();

    assert_eq!(
        text,
        lines(&[
            "Copyright (c) 1990-2008 Info-ZIP - Type 'zip \"-L\"' for software license.",
            "Zip 3.0 (July 5th 2008). Command:",
            "zip [-options] [-b path] [-t mmddyyyy] [-n suffixes] [zipfile list] [-xi list]",
            "  The default action is to add or replace zipfile entries from list, which",
            "  can include the special name - to compress standard input.",
            "  If zipfile and list are omitted, zip compresses stdin to stdout.",
            "  -f   freshen: only changed files  -u   update: only changed or new files",
            "  -d   delete entries in zipfile    -m   move into zipfile (delete OS files)",
            "  -r   recurse into directories     -j   junk (don't record) directory names",
            "  -0   store only                   -l   convert LF to CR LF (-ll CR LF to LF)",
            "  -1   compress faster              -9   compress better",
            "  -q   quiet operation              -v   verbose operation/print version info",
            "  -c   add one-line comments        -z   add zipfile comment",
            "  -@   read names from stdin        -o   make zipfile as old as latest entry",
            "  -x   exclude the following names  -i   include only the following names",
            "  -F   fix zipfile (-FF try harder) -D   do not add directory entries",
            "  -A   adjust self-extracting exe   -J   junk zipfile prefix (unzipsfx)",
            "  -T   test zipfile integrity       -X   eXclude eXtra file attributes",
            "  -y   store symbolic links as the link instead of the referenced file",
            "  -e   encrypt                      -n   don't compress these suffixes",
            "  -h2  show more help",
        ])
    );
}

#[test]
fn netstat_detailed_synopsis_and_narrow_table() {
    let config = CommandConfig::new("NETSTAT")
        .separator(" ")
        .abbreviate_synopsis(true)
        .header("Displays protocol statistics and current TCP/IP network connections.\n");
    let options = vec![
        switch("-a", "Displays all connections and listening ports."),
        switch(
            "-b",
            "Displays the executable involved in creating each connection or \
             listening port. In some cases well-known executables host \
             multiple independent components, and in these cases the \
             sequence of components involved in creating the connection \
             or listening port is displayed. In this case the executable \
             name is in [] at the bottom, on top is the component it called, \
             and so forth until TCP/IP was reached. Note that this option \
             can be time-consuming and will fail unless you have sufficient \
             permissions.",
        ),
        switch("-e", "Displays Ethernet statistics. This may be combined with the -s option."),
        switch("-f", "Displays Fully Qualified Domain Names (FQDN) for foreign addresses."),
        switch("-n", "Displays addresses and port numbers in numerical form."),
        switch("-o", "Displays the owning process ID associated with each connection."),
        OptionDescriptor::new(["-p"]).value_label("proto").description(
            "Shows connections for the protocol specified by proto; proto \
             may be any of: TCP, UDP, TCPv6, or UDPv6.  If used with the -s \
             option to display per-protocol statistics, proto may be any of: \
             IP, IPv6, ICMP, ICMPv6, TCP, TCPv6, UDP, or UDPv6.",
        ),
        switch(
            "-q",
            "Displays all connections, listening ports, and bound \
             nonlistening TCP ports. Bound nonlistening ports may or may not \
             be associated with an active connection.",
        ),
        switch("-r", "Displays the routing table."),
        switch(
            "-s",
            "Displays per-protocol statistics.  By default, statistics are \
             shown for IP, IPv6, ICMP, ICMPv6, TCP, TCPv6, UDP, and UDPv6; \
             the -p option may be used to specify a subset of the default.",
        ),
        switch("-t", "Displays the current connection offload state."),
        switch("-x", "Displays NetworkDirect connections, listeners, and shared endpoints."),
        switch(
            "-y",
            "Displays the TCP connection template for all connections. \
             Cannot be combined with the other options.",
        ),
    ];
    let parameters = vec![ParameterDescriptor::new("interval")
        .value_label("interval")
        .arity(Range::between(0, 1).unwrap())
        .description(
            "Redisplays selected statistics, pausing interval seconds \
             between each display.  Press CTRL+C to stop redisplaying \
             statistics.  If omitted, netstat will print the current \
             configuration information once.",
        )];
    let help = Help::new(&config, &options, &parameters);

    let table = TextTable::new(vec![Column::truncate(15, 2), Column::wrap(65, 1)])
        .unwrap()
        .indent_wrapped_lines(0);
    let mut layout = Layout::new(table, MinimalOptionRenderer, MinimalParameterRenderer);
    layout
        .add_options(&options, &help.value_label_renderer())
        .unwrap();
    layout
        .add_positional_parameters(&parameters, &MinimalValueLabelRenderer)
        .unwrap();

    let text = format!(
        "{}{}\n{}",
        help.header(),
        help.detailed_synopsis(OptionOrder::Declared, false),
        layout
    );
    assert_eq!(
        text,
        lines(&[
            "Displays protocol statistics and current TCP/IP network connections.",
            "",
            "NETSTAT [-a] [-b] [-e] [-f] [-n] [-o] [-p proto] [-q] [-r] [-s] [-t] [-x] [-y]",
            "        [interval]",
            "",
            "  -a            Displays all connections and listening ports.",
            "  -b            Displays the executable involved in creating each connection or",
            "                listening port. In some cases well-known executables host",
            "                multiple independent components, and in these cases the",
            "                sequence of components involved in creating the connection or",
            "                listening port is displayed. In this case the executable name",
            "                is in [] at the bottom, on top is the component it called, and",
            "                so forth until TCP/IP was reached. Note that this option can be",
            "                time-consuming and will fail unless you have sufficient",
            "                permissions.",
            "  -e            Displays Ethernet statistics. This may be combined with the -s",
            "                option.",
            "  -f            Displays Fully Qualified Domain Names (FQDN) for foreign",
            "                addresses.",
            "  -n            Displays addresses and port numbers in numerical form.",
            "  -o            Displays the owning process ID associated with each connection.",
            "  -p proto      Shows connections for the protocol specified by proto; proto",
            "                may be any of: TCP, UDP, TCPv6, or UDPv6.  If used with the -s",
            "                option to display per-protocol statistics, proto may be any of:",
            "                IP, IPv6, ICMP, ICMPv6, TCP, TCPv6, UDP, or UDPv6.",
            "  -q            Displays all connections, listening ports, and bound",
            "                nonlistening TCP ports. Bound nonlistening ports may or may not",
            "                be associated with an active connection.",
            "  -r            Displays the routing table.",
            "  -s            Displays per-protocol statistics.  By default, statistics are",
            "                shown for IP, IPv6, ICMP, ICMPv6, TCP, TCPv6, UDP, and UDPv6;",
            "                the -p option may be used to specify a subset of the default.",
            "  -t            Displays the current connection offload state.",
            "  -x            Displays NetworkDirect connections, listeners, and shared",
            "                endpoints.",
            "  -y            Displays the TCP connection template for all connections.",
            "                Cannot be combined with the other options.",
            "  interval      Redisplays selected statistics, pausing interval seconds",
            "                between each display.  Press CTRL+C to stop redisplaying",
            "                statistics.  If omitted, netstat will print the current",
            "                configuration information once.",
        ])
    );
}

// ============================================================================
// Specs loaded from files
// ============================================================================

#[test]
fn usage_from_yaml_spec() {
    let spec = CommandSpec::from_yaml(
        r#"
command:
  name: app
  required_option_marker: "*"
options:
  - names: ["-o", "--output"]
    required: true
    value_label: FILE
    description: [where to write, one line per record]
  - names: ["-q", "--quiet"]
    flag: true
    description: say less
parameters:
  - name: inputs
    arity: "1..*"
    description: files to read
"#,
    )
    .unwrap();
    assert_eq!(
        spec.help().usage().unwrap(),
        lines(&[
            "Usage: app [-q] -o=FILE <inputs> [<inputs>...]",
            "* -o, --output=FILE           where to write",
            "                              one line per record",
            "  -q, --quiet                 say less",
            "*     inputs                  files to read",
        ])
    );
}

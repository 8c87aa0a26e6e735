use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use formwork::composing::Composed;
use formwork::formatting::Identity;
use formwork::language::AddressNode;
use formwork::loading::{self, Bundle};
use formwork::rendering::{render, Html, Terminal, Typst};
use formwork::settings::Scheme;
use formwork::templating::{fill, Interactive, Printable};

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("formwork")
        .version(VERSION)
        .propagate_version(true)
        .about("Render legal forms with their annotations, comments, and blanks.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more detail to standard error. Repeat for even more."),
        )
        .subcommand(
            Command::new("check")
                .about("Check that a bundle composes without integrity errors")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON bundle containing the form you want to check."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given bundle to standard output")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["html", "typst", "text"])
                        .default_value("html")
                        .help("Which kind of markup to produce."),
                )
                .arg(
                    Arg::new("child-links")
                        .long("child-links")
                        .action(ArgAction::SetTrue)
                        .help("Link each section to the page for its content digest."),
                )
                .arg(
                    Arg::new("numbering")
                        .long("numbering")
                        .value_parser(["outline", "decimal", "rse", "ase"])
                        .help("How to number sections in Typst output, overriding the bundle's settings."),
                )
                .arg(
                    Arg::new("bare")
                        .long("bare")
                        .action(ArgAction::SetTrue)
                        .help("Emit only the rendered form, without the surrounding page or preamble."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes in text output even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON bundle containing the form you want to render."),
                ),
        )
        .subcommand(
            Command::new("print")
                .about("Render the given bundle to PDF using Typst")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON bundle containing the form you want to print."),
                ),
        )
        .subcommand(
            Command::new("digest")
                .about("Print the content-address digest of the resolved form")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON bundle containing the form you want to identify."),
                ),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let bundle = prepare(filename);
            let address = bundle.address();
            let composed = compose(&bundle, &address, filename);
            debug!(contents = composed.contents.is_some());
            info!("Check complete: {}", filename.display());
        }
        Some(("render", submatches)) => {
            let filename = filename(submatches);
            let mut bundle = prepare(filename);

            if submatches.get_flag("child-links") {
                bundle
                    .settings
                    .child_links = true;
            }
            if let Some(scheme) = submatches.get_one::<String>("numbering") {
                // restricted to the known schemes by value_parser above
                if let Ok(scheme) = scheme.parse::<Scheme>() {
                    bundle
                        .settings
                        .numbering = scheme;
                }
            }

            let address = bundle.address();
            let composed = compose(&bundle, &address, filename);

            let bare = submatches.get_flag("bare");
            let child_links = bundle
                .settings
                .child_links;
            let kind = submatches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("html");

            let result = match kind {
                "typst" if bare => render(&Typst::new(&bundle.settings), &composed),
                "typst" => page(&Printable, &bundle, &address, &composed),
                "text" => {
                    let raw = submatches.get_flag("raw-control-chars");
                    if raw || std::io::stdout().is_terminal() {
                        render(&Terminal, &composed)
                    } else {
                        render(&Identity, &composed)
                    }
                }
                _ if bare => render(&Html { child_links }, &composed),
                _ => page(&Interactive { child_links }, &bundle, &address, &composed),
            };

            if let Err(error) = output::emit(&result) {
                eprintln!("{}", problem::concise_output_error(filename, &error));
                std::process::exit(1);
            }
        }
        Some(("print", submatches)) => {
            let filename = filename(submatches);
            let bundle = prepare(filename);
            let address = bundle.address();
            let composed = compose(&bundle, &address, filename);

            let markup = page(&Printable, &bundle, &address, &composed);

            match output::via_typst(filename, &markup) {
                Ok(target) => info!("Wrote {}", target.display()),
                Err(error) => {
                    eprintln!("{}", problem::concise_output_error(filename, &error));
                    std::process::exit(1);
                }
            }
        }
        Some(("digest", submatches)) => {
            let filename = filename(submatches);
            let bundle = prepare(filename);
            let address = bundle.address();
            println!("{}", address.digest);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: formwork [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            // required(true) above means clap has already rejected this
            eprintln!("usage: formwork [COMMAND] <filename>");
            std::process::exit(2);
        }
    }
}

fn prepare(filename: &Path) -> Bundle {
    let content = match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::full_loading_error(&error));
            std::process::exit(1);
        }
    };

    match loading::parse(filename, &content) {
        Ok(bundle) => bundle,
        Err(error) => {
            eprintln!("{}", problem::full_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn compose<'i>(bundle: &'i Bundle, address: &'i AddressNode, filename: &Path) -> Composed<'i> {
    match bundle.compose(address) {
        Ok(composed) => composed,
        Err(error) => {
            debug!(?error);
            eprintln!("{}", problem::full_integrity_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn page(
    template: &impl formwork::templating::Template,
    bundle: &Bundle,
    address: &AddressNode,
    composed: &Composed,
) -> String {
    match fill(template, bundle, address, composed) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{}", problem::concise_template_error(&error));
            std::process::exit(1);
        }
    }
}

use std::io::{self, BufRead};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::arena::{NaryTree, ARITY};
use crate::bench::{self, BenchReport, OPERATIONS};
use crate::cli::args::{Cli, Commands, ConfigCommands, Fixture};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::display::{render_binary, TreeRender};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    match &cli.command {
        Some(Commands::Render { fixture, random }) => _render(*fixture, *random),
        Some(Commands::Bench { sizes }) => _bench(sizes.as_deref(), &settings),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Some(Commands::Repl) | None => _repl(&settings),
    }
}

#[instrument]
fn _render(fixture: Fixture, random: Option<usize>) -> CliResult<()> {
    let tree = match random {
        Some(count) => NaryTree::random(count),
        None => match fixture {
            Fixture::Directory => NaryTree::sample_directory(),
            Fixture::Full => NaryTree::full_two_level(),
        },
    };
    show_tree(&tree);
    Ok(())
}

#[instrument(skip(settings))]
fn _bench(sizes: Option<&[usize]>, settings: &Settings) -> CliResult<()> {
    let sizes = sizes.unwrap_or(&settings.bench.sizes);
    if sizes.is_empty() {
        return Err(CliError::InvalidArgs("no bench sizes given".to_string()));
    }
    debug!("sizes: {:?}", sizes);
    let report = bench::run(sizes);
    print_report(&report);
    Ok(())
}

fn print_report(report: &BenchReport) {
    output::header(&format!(
        "Evaluation ({}) — times in seconds",
        report.started_at.format("%Y-%m-%d %H:%M:%S")
    ));
    let header = std::iter::once(format!("{:<6}", "size"))
        .chain(OPERATIONS.iter().map(|op| format!("{:<8}", op)))
        .collect::<Vec<_>>()
        .join(" | ");
    output::info(&header);
    output::info(&"-".repeat(header.len()));
    for row in &report.rows {
        let line = std::iter::once(format!("{:<6}", row.size))
            .chain(row.timings.iter().map(|t| format!("{:.6}", t.as_secs_f64())))
            .collect::<Vec<_>>()
            .join(" | ");
        output::info(&line);
    }
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    match toml::to_string_pretty(settings) {
        Ok(rendered) => {
            output::info(&rendered);
            Ok(())
        }
        Err(e) => Err(CliError::InvalidArgs(format!(
            "cannot render settings: {e}"
        ))),
    }
}

fn _config_path() -> CliResult<()> {
    match Settings::global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("no config directory available"),
    }
    Ok(())
}

enum ReplOutcome {
    Continue,
    Quit,
}

#[instrument(skip(settings))]
fn _repl(settings: &Settings) -> CliResult<()> {
    output::header(&format!("arbor — fixed-arity tree engine (arity {ARITY})"));
    output::info("Type 'help' for the command list, 'quit' to leave.");

    let stdin = io::stdin();
    let mut tree = NaryTree::new();
    loop {
        output::prompt(">>>");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match handle_line(&mut tree, settings, line.trim()) {
            ReplOutcome::Quit => break,
            ReplOutcome::Continue => {}
        }
    }
    Ok(())
}

fn handle_line(tree: &mut NaryTree, settings: &Settings, line: &str) -> ReplOutcome {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "" => {}
        "help" => print_help(),
        "quit" | "exit" => return ReplOutcome::Quit,

        "new" => {
            if rest.is_empty() {
                output::warning("usage: new <label>");
            } else {
                *tree = NaryTree::with_root(rest);
                output::success("new tree created");
                show_tree(tree);
            }
        }
        "load" => match rest {
            "directory" => {
                *tree = NaryTree::sample_directory();
                show_tree(tree);
            }
            "full" => {
                *tree = NaryTree::full_two_level();
                show_tree(tree);
            }
            _ => output::warning("usage: load directory|full"),
        },
        "random" => {
            let count = if rest.is_empty() {
                Some(settings.random_size)
            } else {
                rest.parse().ok()
            };
            match count {
                Some(count) => {
                    *tree = NaryTree::random(count);
                    show_tree(tree);
                }
                None => output::warning("usage: random [count]"),
            }
        }

        "show" => show_tree(tree),
        "info" => print_info(tree),

        "insert" => match rest.split_once(char::is_whitespace) {
            Some((parent, label)) if !label.trim().is_empty() => {
                match tree.search(parent) {
                    Some(parent) => match tree.insert(parent, label.trim()) {
                        Ok(_) => show_tree(tree),
                        Err(e) => output::warning(&e),
                    },
                    None => output::warning("parent not found"),
                }
            }
            _ => output::warning("usage: insert <parent> <label>"),
        },
        "delete" => {
            if rest.is_empty() {
                output::warning("usage: delete <label>");
            } else {
                match tree.delete(rest) {
                    Some(removed) => {
                        output::success(&format!("removed {removed} node(s)"));
                        show_tree(tree);
                    }
                    None => output::warning("label not found"),
                }
            }
        }
        "modify" => match rest.split_once(char::is_whitespace) {
            Some((old, new)) if !new.trim().is_empty() => match tree.search(old) {
                Some(node) => {
                    tree.modify(node, new.trim());
                    show_tree(tree);
                }
                None => output::warning("label not found"),
            },
            _ => output::warning("usage: modify <label> <new-label>"),
        },
        "search" => {
            if rest.is_empty() {
                output::warning("usage: search <label>");
            } else {
                match tree.search(rest) {
                    Some(_) => output::success(&format!("'{rest}' found")),
                    None => output::info("not found"),
                }
            }
        }
        "path" => {
            let mut tokens = rest.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(from), Some(to)) => {
                    let endpoints = (tree.search(from), tree.search(to));
                    match endpoints {
                        (Some(a), Some(b)) => match tree.path(a, b) {
                            Some(path) => output::info(&path.join(" -> ")),
                            None => output::info("no downward path"),
                        },
                        _ => output::warning("endpoint not found"),
                    }
                }
                _ => output::warning("usage: path <from> <to>"),
            }
        }
        "extract" => {
            if rest.is_empty() {
                output::warning("usage: extract <label>");
            } else {
                match tree.extract(rest) {
                    Some(extracted) => {
                        output::header("Remaining tree:");
                        show_tree(tree);
                        output::header("Extracted subtree:");
                        show_tree(&extracted);
                    }
                    None => output::warning("label not found"),
                }
            }
        }
        "binary" => match tree.to_binary() {
            Some(binary) => output::info(&render_binary(&binary)),
            None => output::info("tree is empty"),
        },
        "bench" => {
            let report = bench::run(&settings.bench.sizes);
            print_report(&report);
        }

        _ => output::warning(&format!("unknown command: '{cmd}' (try 'help')")),
    }
    ReplOutcome::Continue
}

fn show_tree(tree: &NaryTree) {
    output::info(&tree.to_tree_string());
    if !tree.is_empty() {
        let (dfs, bfs) = tree.traversal_lines();
        output::info(&dfs);
        output::info(&bfs);
    }
}

fn print_info(tree: &NaryTree) {
    output::detail(&format!("height      : {}", tree.height()));
    output::detail(&format!("node count  : {}", tree.node_count()));
    output::detail(&format!("is complete : {}", tree.is_complete()));
    let (size, root) = tree.max_complete_subtree();
    match root.and_then(|idx| tree.label(idx)) {
        Some(label) => output::detail(&format!(
            "max complete subtree: '{label}' ({size} node(s))"
        )),
        None => output::detail("max complete subtree: none"),
    }
}

fn print_help() {
    output::header("Tree commands");
    output::detail("new <label>             create a tree with a single root");
    output::detail("load directory|full     load a canned fixture");
    output::detail("random [count]          build a random tree (breadth-first fill)");
    output::detail("show                    render the tree and both traversals");
    output::detail("info                    height, node count, completeness, max complete subtree");
    output::header("Mutations");
    output::detail("insert <parent> <label> insert under the first free slot of <parent>");
    output::detail("delete <label>          remove the node and its whole subtree");
    output::detail("modify <label> <new>    rename a node in place");
    output::detail("extract <label>         detach a subtree and show both parts");
    output::header("Queries");
    output::detail("search <label>          pre-order search");
    output::detail("path <from> <to>        downward path between two nodes");
    output::detail("binary                  first-child/next-sibling transform");
    output::detail("bench                   run the timing battery");
    output::detail("quit                    leave the session");
}

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use dna_toolkit::error::{ErrorKind, ToolkitError};
use dna_toolkit::store::jsonl::{JsonLinesStore, DEFAULT_STORE_PATH};
use dna_toolkit::toolkit::{AnalysisKind, ListFilter, Toolkit, ToolkitOpt};
use dna_toolkit::util;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "dna-toolkit",
    author,
    version,
    about = "Store DNA sequences, compute GC content, translate to amino acids and summarise the library",
    arg_required_else_help = true
)]
struct Cli {
    /// JSON Lines record store
    #[arg(long, global = true, env = "DNA_TOOLKIT_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Worker threads for `--all` analyses (0 = one per core)
    #[arg(short = 't', long = "threads", global = true, default_value_t = 1)]
    threads: usize,
    #[command(subcommand)]
    command: Commands,
}

/// Either a single record id or `--all`
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Target {
    /// Sequence id
    id: Option<u64>,
    /// Apply to every stored sequence
    #[arg(long)]
    all: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a new nucleotide sequence
    Add {
        label: String,
        /// Bases A, T, C, G (case-insensitive), at least one codon long
        sequence: String,
    },
    /// Submit every record of a FASTA file
    Import {
        fasta: PathBuf,
    },
    /// List stored sequences
    List {
        #[arg(long)]
        nuc_analysed: Option<bool>,
        #[arg(long)]
        aa_analysed: Option<bool>,
    },
    /// Show one sequence with all analysis results
    Show {
        id: u64,
    },
    /// Replace a sequence label
    Relabel {
        id: u64,
        label: String,
    },
    /// Delete one sequence, or all of them
    Delete {
        #[command(flatten)]
        target: Target,
    },
    /// GC content and length
    Nucleotide {
        #[command(flatten)]
        target: Target,
    },
    /// Translate to amino acids, with composition and top-3 residues
    Aminoacid {
        #[command(flatten)]
        target: Target,
    },
    /// Summary statistics across all stored sequences
    Summary,
}

#[derive(Serialize)]
struct Response<T: Serialize> {
    message: String,
    #[serde(flatten)]
    body: T,
}

fn respond<T: Serialize>(message: impl Into<String>, body: T) -> Result<()> {
    print_json(&Response { message: message.into(), body })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    util::log::init_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// 2 = 输入校验失败，3 = 记录不存在，1 = 其他
fn exit_code(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<ToolkitError>().map(ToolkitError::kind) {
        Some(ErrorKind::Validation) => 2,
        Some(ErrorKind::NotFound) => 3,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = JsonLinesStore::new(&cli.store);
    let opt = ToolkitOpt { threads: cli.threads };
    let mut tk = Toolkit::new(store, opt);

    match cli.command {
        Commands::Add { label, sequence } => {
            let record = tk.create(&label, &sequence)?;
            respond(
                "A new DNA nucleotide sequence has been created and added to the toolkit. \
                 Use its ID to fetch it, run nucleotide analysis or convert it to amino acids.",
                record,
            )
        }
        Commands::Import { fasta } => {
            let fh = std::fs::File::open(&fasta)
                .with_context(|| format!("cannot open FASTA file '{}'", fasta.display()))?;
            let report = tk.import_fasta(std::io::BufReader::new(fh))?;
            respond(
                format!(
                    "Imported {} sequence(s) from '{}', rejected {}.",
                    report.created.len(),
                    fasta.display(),
                    report.rejected.len()
                ),
                report,
            )
        }
        Commands::List { nuc_analysed, aa_analysed } => {
            let rows = tk.list(&ListFilter { nuc_analysed, aa_analysed })?;
            print_json(&rows)
        }
        Commands::Show { id } => {
            let record = tk.get(id)?;
            respond(format!("DNA nucleotide sequence with ID:{} retrieved.", id), record)
        }
        Commands::Relabel { id, label } => {
            let record = tk.relabel(id, &label)?;
            respond(format!("Sequence label updated for entry ID:{}.", id), record)
        }
        Commands::Delete { target } => match target.id {
            Some(id) => {
                let record = tk.delete(id)?;
                respond(format!("DNA nucleotide sequence with ID:{} deleted. Details of the deleted entry below.", id), record)
            }
            None => {
                let n = tk.delete_all()?;
                respond("All entries deleted.", serde_json::json!({ "deleted": n }))
            }
        },
        Commands::Nucleotide { target } => match target.id {
            Some(id) => {
                let mut report = tk.analyse_nucleotide(id)?;
                report.gc_content = round4(report.gc_content);
                respond(
                    format!(
                        "DNA nucleotide sequence with ID:{} analysed. Length and total GC content below, \
                         usable for primer melting and annealing temperature design.",
                        id
                    ),
                    report,
                )
            }
            None => {
                let report = tk.analyse_all(AnalysisKind::Nucleotide)?;
                respond(format!("Nucleotide analysis stored for {} sequence(s).", report.analysed.len()), report)
            }
        },
        Commands::Aminoacid { target } => match target.id {
            Some(id) => {
                let report = tk.analyse_amino_acid(id)?;
                respond(
                    format!(
                        "DNA to amino acid conversion for sequence ID:{} completed. Converted sequence, residue count, \
                         composition by chemical property and the top 3 residues below.",
                        id
                    ),
                    report,
                )
            }
            None => {
                let report = tk.analyse_all(AnalysisKind::AminoAcid)?;
                respond(
                    format!(
                        "Amino acid conversion stored for {} sequence(s), {} produced no viable amino acid sequence.",
                        report.analysed.len(),
                        report.skipped.len()
                    ),
                    report,
                )
            }
        },
        Commands::Summary => {
            let stats = tk.summary()?;
            respond(
                "Summary of key statistics across all stored sequences. A null statistic means the \
                 corresponding analysis has not been performed yet.",
                stats,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dna_toolkit::error::{NotFoundError, ValidationError};

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        let v = anyhow::Error::from(ToolkitError::from(ValidationError::EmptyLabel));
        let n = anyhow::Error::from(ToolkitError::from(NotFoundError::Id(1))).context("while showing");
        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code(&v), 2);
        assert_eq!(exit_code(&n), 3);
        assert_eq!(exit_code(&other), 1);
    }

    #[test]
    fn target_requires_id_or_all() {
        assert!(Cli::try_parse_from(["dna-toolkit", "delete"]).is_err());
        assert!(Cli::try_parse_from(["dna-toolkit", "delete", "3", "--all"]).is_err());
        let cli = Cli::try_parse_from(["dna-toolkit", "nucleotide", "--all", "-t", "4"]).unwrap();
        assert_eq!(cli.threads, 4);
        match cli.command {
            Commands::Nucleotide { target } => assert!(target.all && target.id.is_none()),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn list_filter_flags_take_values() {
        let cli = Cli::try_parse_from(["dna-toolkit", "list", "--nuc-analysed", "true"]).unwrap();
        match cli.command {
            Commands::List { nuc_analysed, aa_analysed } => {
                assert_eq!(nuc_analysed, Some(true));
                assert_eq!(aa_analysed, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn response_flattens_message_beside_record() {
        use dna_toolkit::model::{Sequence, SequenceRecord};

        let record = SequenceRecord::new(7, "gene-A", Sequence::parse("atggag").unwrap()).unwrap();
        let value = serde_json::to_value(Response {
            message: format!("DNA nucleotide sequence with ID:{} retrieved.", record.id()),
            body: record,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "DNA nucleotide sequence with ID:7 retrieved.",
                "id": 7,
                "label": "gene-A",
                "sequence": "ATGGAG",
                "nuc_analysed": false,
                "aa_analysed": false,
            })
        );
    }

    #[test]
    fn round4_for_display() {
        assert_eq!(round4(6.0 / 11.0), 0.5455);
    }
}

mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use contact_sheet::{ContactSheetOptions, LayoutMode, SourceDocument};
use logger::StderrLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csheet", about = "PDF contact sheet planner", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page order of every output sheet
    Plan {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Also print the grid cell of every page
        #[arg(long)]
        positions: bool,
    },

    /// Show sheet statistics only
    Stats {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Input PDF file(s) - pair mode uses all of them, in order
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Load options from a JSON file (flags below override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Layout mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Rows per sheet
    #[arg(long)]
    rows: Option<usize>,

    /// Columns per sheet
    #[arg(long)]
    columns: Option<usize>,

    /// Fill direction for standard mode
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Standard,
    Custom,
    Pair,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Down,
    Across,
}

impl From<ModeArg> for LayoutMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Standard => Self::Standard,
            ModeArg::Custom => Self::CustomOrder,
            ModeArg::Pair => Self::Pair,
        }
    }
}

impl From<DirectionArg> for contact_sheet::LayoutDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Down => Self::Down,
            DirectionArg::Across => Self::Across,
        }
    }
}

impl LayoutArgs {
    async fn options(&self) -> Result<ContactSheetOptions> {
        let mut options = match &self.config {
            Some(path) => ContactSheetOptions::load(path)
                .await
                .with_context(|| format!("loading {}", path.display()))?,
            None => ContactSheetOptions::default(),
        };

        if let Some(mode) = self.mode {
            options.mode = mode.into();
        }
        if let Some(rows) = self.rows {
            options.rows = rows;
        }
        if let Some(columns) = self.columns {
            options.columns = columns;
        }
        if let Some(direction) = self.direction {
            options.direction = direction.into();
        }
        options.validate()?;

        if let Some(path) = &self.save_config {
            options.save(path).await?;
            log::info!("saved options to {}", path.display());
        }
        Ok(options)
    }

    async fn load(&self) -> Result<(ContactSheetOptions, Vec<SourceDocument>)> {
        let options = self.options().await?;
        let documents = contact_sheet::load_multiple_pdfs(&self.input).await?;
        Ok((options, documents))
    }
}

fn print_statistics(documents: &[SourceDocument], options: &ContactSheetOptions) {
    let stats = contact_sheet::calculate_statistics(documents, options);
    println!("Layout Statistics ({:?}):", options.mode);
    println!("  Source pages: {}", stats.source_pages);
    println!("  Pages per sheet: {}", stats.pages_per_sheet);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Empty cells: {}", stats.empty_cells);
    if let (Some(odd), Some(even)) = (stats.odd_sheets, stats.even_sheets) {
        println!("  Odd sheets: {}", odd);
        println!("  Even sheets: {}", even);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Plan { layout, positions } => {
            let (options, documents) = layout.load().await?;
            print_statistics(&documents, &options);

            let result = contact_sheet::generate(&documents, &options);
            if result.is_empty() {
                println!("Nothing to generate");
                return Ok(());
            }

            let original_name = documents.first().map_or("", |doc| doc.name.as_str());
            for sheet in &result.sheets {
                let file_name =
                    contact_sheet::sheet_file_name(result.mode, sheet.index + 1, original_name);
                println!("{} ({:?}): {:?}", file_name, sheet.kind, sheet.page_numbers());
                if positions {
                    for placed in &sheet.placements {
                        println!(
                            "    doc {} page {} -> row {}, column {}",
                            placed.page.document.0,
                            placed.page.page_number,
                            placed.position.row,
                            placed.position.col
                        );
                    }
                }
            }
        }

        Commands::Stats { layout } => {
            let (options, documents) = layout.load().await?;
            print_statistics(&documents, &options);
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use album_async_runtime::{AlbumService, PageId};
use album_impose::{LayoutOptions, SheetMargins, SheetMarks};
use album_store::AlbumStore;

mod logger;

#[derive(Parser)]
#[command(name = "albumt", about = "Photo album print tools", version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available gallery images
    Gallery {
        /// Photos directory
        #[arg(short, long)]
        dir: PathBuf,
    },

    /// Add gallery images to the album
    Add {
        /// Album JSON file
        #[arg(short, long)]
        album: PathBuf,

        /// Photos directory
        #[arg(short, long)]
        photos_dir: PathBuf,

        /// Add every gallery image
        #[arg(long, conflicts_with = "filenames")]
        all: bool,

        /// Image filenames to add
        #[arg(required_unless_present = "all")]
        filenames: Vec<String>,
    },

    /// Rotate a page one 90° step clockwise
    Rotate {
        /// Album JSON file
        #[arg(short, long)]
        album: PathBuf,

        /// Photos directory
        #[arg(short, long)]
        photos_dir: PathBuf,

        /// Page id
        #[arg(long)]
        id: String,
    },

    /// Impose the album onto duplex sheets and render a printable PDF
    Impose {
        /// Album JSON file
        #[arg(short, long)]
        album: PathBuf,

        /// Photos directory
        #[arg(short, long)]
        photos_dir: PathBuf,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "stats_only")]
        output: Option<PathBuf>,

        /// Pages per sheet side
        #[arg(long, default_value = "9")]
        capacity: usize,

        /// Output paper size
        #[arg(long, default_value = "a3", value_enum)]
        paper: PaperArg,

        /// Output orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Disable corner cut marks
        #[arg(long)]
        no_cut_marks: bool,

        /// Disable punch-hole guides
        #[arg(long)]
        no_punch_marks: bool,

        /// Disable sheet labels
        #[arg(long)]
        no_labels: bool,

        /// Sheet margin in mm (uniform on all sides)
        #[arg(long, default_value = "5.0")]
        sheet_margin: f32,

        /// Show statistics only, don't render the PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for album_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for album_impose::PaperOrientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::init(cli.verbose)?;

    match cli.command {
        Commands::Gallery { dir } => {
            let images = album_store::list_images(&dir).await?;
            for image in &images {
                println!("{}", image);
            }
            println!("{} images in {}", images.len(), dir.display());
        }

        Commands::Add {
            album,
            photos_dir,
            all,
            filenames,
        } => {
            let store = AlbumStore::new(&album);
            let mut service = AlbumService::new(store, &photos_dir);
            service.load_album().await?;

            let filenames = if all {
                album_store::list_images(&photos_dir).await?
            } else {
                filenames
            };

            let added = service.add_all_from_gallery(&filenames).await?;
            service.save_album().await?;
            println!("Added {} pages → {}", added, album.display());
        }

        Commands::Rotate {
            album,
            photos_dir,
            id,
        } => {
            let store = AlbumStore::new(&album);
            let mut service = AlbumService::new(store, &photos_dir);
            service.load_album().await?;

            let steps = service.rotate_page(&PageId::from(id.as_str())).await?;
            service.save_album().await?;
            println!("Page {} now at {} quarter turns", id, steps);
        }

        Commands::Impose {
            album,
            photos_dir,
            output,
            capacity,
            paper,
            orientation,
            no_cut_marks,
            no_punch_marks,
            no_labels,
            sheet_margin,
            stats_only,
        } => {
            let options = LayoutOptions {
                capacity,
                paper_size: paper.into(),
                paper_orientation: orientation.into(),
                margins: SheetMargins::uniform(sheet_margin),
                marks: SheetMarks {
                    cut_marks: !no_cut_marks,
                    punch_marks: !no_punch_marks,
                    sheet_labels: !no_labels,
                },
            };

            let store = AlbumStore::new(&album);
            let mut service = AlbumService::with_options(store, &photos_dir, options);
            service.load_album().await?;

            // Calculate and show statistics
            let stats = service.layout_statistics()?;
            println!("Layout Statistics:");
            println!("  Album pages: {}", stats.source_pages);
            println!("  Front sheets: {}", stats.front_sheets);
            println!("  Back sheets: {}", stats.back_sheets);
            println!("  Total sheets: {}", stats.total_sheets);

            if stats_only {
                return Ok(());
            }

            let output = output.expect("clap enforces --output unless --stats-only");
            service.print_to_file(&output).await?;
            println!("Imposed → {}", output.display());
        }
    }

    Ok(())
}

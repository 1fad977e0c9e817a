use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tullips_gallery::catalog::PhotoId;
use tullips_gallery::config::{self, GalleryConfig};
use tullips_gallery::favorites::FileStore;
use tullips_gallery::gallery::Gallery;
use tullips_gallery::{output, render};

#[derive(Parser)]
#[command(name = "tullips-gallery")]
#[command(about = "Browse, filter, and favorite the Tullips photo gallery")]
#[command(long_about = "\
Browse, filter, and favorite the Tullips photo gallery

Photos are grouped into five categories (flowers, plants, stonework, gardens,
decor). Filters combine a category with a case-insensitive search over alt text
and tags. Results are shown 12 at a time; use --page to see later slices.

Favorites are stored as a JSON array of photo ids in
<state-dir>/<storage_key>.json and survive between runs.

Run 'tullips-gallery gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing gallery.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Directory for persisted favorites (overrides favorites.state_dir)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Shared flags for commands that show a filtered slice.
#[derive(Args, Clone)]
struct FilterArgs {
    /// Category key: all, flowers, plants, stonework, gardens, decor
    #[arg(long, default_value = "all")]
    category: String,

    /// Case-insensitive search over alt text and tags
    #[arg(long, default_value = "")]
    search: String,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Subcommand)]
enum Command {
    #[command(flatten)]
    Gallery(GalleryCommand),
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

/// Commands that open the gallery and its favorites store.
#[derive(Subcommand)]
enum GalleryCommand {
    /// Show one page of photos matching the filter
    List(FilterArgs),
    /// Show photo counts per category
    Counts,
    /// Toggle a photo's favorite state
    Favorite {
        /// Photo id
        id: PhotoId,
    },
    /// List favorite photos
    Favorites,
    /// Show full details for one photo
    Show {
        /// Photo id
        id: PhotoId,
    },
    /// Write the gallery as an HTML document
    Render {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file
        #[arg(long, default_value = "gallery.html")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(())
        }
        Command::Gallery(command) => run(command, &cli.config_dir, cli.state_dir.as_deref()),
    }
}

/// Load config, open the gallery over the file store, and run one command.
fn run(
    command: GalleryCommand,
    config_dir: &Path,
    state_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(config_dir)?;
    let mut gallery = open_gallery(&config, state_dir);
    if let Some(warning) = gallery.take_load_warning() {
        output::print_warning(&warning);
    }

    match command {
        GalleryCommand::List(filter) => {
            apply_filter(&mut gallery, &filter);
            output::print_list(&gallery);
        }
        GalleryCommand::Counts => output::print_counts(&gallery),
        GalleryCommand::Favorite { id } => {
            let outcome = gallery.toggle_favorite(id);
            output::print_toggle(&outcome);
        }
        GalleryCommand::Favorites => output::print_favorites(&gallery),
        GalleryCommand::Show { id } => match gallery.preview_card(id) {
            Some(card) => output::print_preview(&card),
            None => return Err(format!("no photo with id {id}").into()),
        },
        GalleryCommand::Render { filter, output: path } => {
            apply_filter(&mut gallery, &filter);
            render::write_document(&gallery, &config.site_name, &path)?;
            println!(
                "Wrote {} ({} of {} photos)",
                path.display(),
                gallery.visible_slice().len(),
                gallery.filtered_count()
            );
        }
    }

    Ok(())
}

/// Build the engine over a file store rooted at the resolved state directory.
fn open_gallery(config: &GalleryConfig, state_dir: Option<&Path>) -> Gallery<FileStore> {
    let dir = state_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.favorites.state_dir));
    log::debug!("favorites state dir: {}", dir.display());
    Gallery::new(
        config.build_catalog(),
        FileStore::new(dir),
        &config.favorites.storage_key,
        config.pagination.page_size,
    )
}

/// Apply category and search, then jump to the requested 1-based page.
fn apply_filter(gallery: &mut Gallery<FileStore>, filter: &FilterArgs) {
    gallery.set_category_filter(&filter.category);
    gallery.set_search_term(&filter.search);
    gallery.go_to_page(filter.page.saturating_sub(1));
}

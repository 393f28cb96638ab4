use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, error};

use nyt_recipe::{fetch_markup_with_settings, ImportError, Recipe, Settings};

#[derive(Parser)]
#[command(name = "nyt-recipe", about = "Extracts a recipe from NYT Cooking")]
struct Args {
    /// Recipe page URLs
    #[arg(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print the recipe as plaintext instead of saving it as HTML
    #[arg(short, long)]
    plaintext: bool,

    /// Directory to save recipes into
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

fn recipes_dir(args: &Args, settings: &Settings) -> Result<PathBuf, ImportError> {
    if let Some(dir) = &args.output {
        return Ok(dir.clone());
    }
    if let Some(dir) = &settings.output_dir {
        return Ok(dir.clone());
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("recipes"))
        .ok_or(ImportError::MissingHomeDir)
}

fn save_recipe(recipe: &Recipe, dir: &Path) -> Result<(), ImportError> {
    fs::create_dir_all(dir).map_err(|source| ImportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut stem = recipe.title.to_lowercase().replace(' ', "_").replace('\'', "");
    if stem.is_empty() {
        stem = "recipe".to_string();
    }
    let path = dir.join(format!("{stem}.html"));

    debug!("saving to {}", path.display());
    fs::write(&path, recipe.to_html()).map_err(|source| ImportError::Write {
        path: path.clone(),
        source,
    })?;

    println!("Saved recipe \"{}\" to {}", recipe.title, path.display());
    Ok(())
}

fn download_recipe(url: &str, args: &Args, settings: &Settings) -> Result<(), ImportError> {
    let raw = fetch_markup_with_settings(url, settings)?;
    let recipe = Recipe::from_markup(&raw);

    if args.plaintext {
        println!("{}", recipe.to_plaintext());
        return Ok(());
    }

    let dir = recipes_dir(args, settings)?;
    save_recipe(&recipe, &dir)
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.debug { "debug" } else { "warn" }),
    )
    .init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", ImportError::from(err));
            Settings::default()
        }
    };

    // A failed URL should not abort the rest of the batch
    for url in &args.urls {
        if let Err(err) = download_recipe(url, &args, &settings) {
            error!("{err}");
        }
    }
}

use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use minefield::Minefield;
use minefield::args::FieldArgs;
use minefield::emoji::{display_symbols, emoji_grid, export_emoji, render};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = FieldArgs::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    run(&args)
}

fn run(args: &FieldArgs) -> Result<()> {
    let field = Minefield::from_params(args.params())?;
    info!("effective seed: {}", field.effective_seed());

    if !args.no_display {
        let grid = if args.emoji_out.is_some() || args.field_out.is_none() {
            emoji_grid(&field, args.spoilers())
        } else {
            display_symbols(&field)
        };
        println!("{}", render(&grid));
    }

    if let Some(path) = &args.field_out {
        field.save_to_file(path)?;
    }

    if let Some(path) = &args.emoji_out {
        export_emoji(&field, path, args.spoilers())?;
    }

    Ok(())
}

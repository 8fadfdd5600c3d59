use pokedex_lookup::{run, CliOptions};
use std::env;

fn usage() -> ! {
    eprintln!(
        "Usage: pokedex-lookup [consulta...] [--api URL] [--moves N]\n\
         Busca un Pokémon por nombre o número, o un tipo en español o inglés.\n\
         Sin consulta se abre el modo interactivo ('limpiar' borra, 'salir' termina)."
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();
    let mut words: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api" => {
                opts.base_url = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--api requires a base URL"))?;
            }
            "--moves" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--moves requires a number"))?;
                opts.move_limit = val.parse()?;
            }
            "--help" | "-h" => usage(),
            other if other.starts_with("--") => {
                return Err(anyhow::anyhow!("Unknown argument {other}"))
            }
            other => words.push(other.to_string()),
        }
    }

    if !words.is_empty() {
        opts.query = Some(words.join(" "));
    }
    Ok(opts)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = parse_args()?;
    run(opts).await
}

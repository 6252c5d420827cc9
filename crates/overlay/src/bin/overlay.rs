use std::env;

use overlay::{ServerConfig, load_patch, parse_args};

fn main() {
    let paths = match parse_args(env::args()) {
        Ok(paths) => paths,
        Err(usage) => {
            eprintln!("{}", usage);
            std::process::exit(1);
        }
    };

    let mut config = ServerConfig::default();
    for path in paths {
        match load_patch(&path) {
            Ok(patch) => {
                config = config.apply(&patch);
                println!("✓ Applied {}", path.display());
            }
            Err(e) => {
                eprintln!("✗ {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let explicit = config.explicit_fields();
    if explicit.is_empty() {
        println!("Explicit fields: (none)");
    } else {
        println!("Explicit fields: {}", explicit.join(", "));
    }

    let resolved = config.with_defaults().to_patch();
    match serde_json::to_string_pretty(&resolved) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("✗ Failed to encode config: {}", e);
            std::process::exit(1);
        }
    }
}

use serde::Deserialize;
use std::env;
use std::fs;

pub_struct!(Clone, Deserialize; Server { port: u16 });

pub_struct!(Clone, Deserialize; LogTypes {
    info: String,
    warning: String,
    severe: String,
});

pub_struct!(Clone, Deserialize; Watchtower {
    enabled: bool,
    endpoint: String,
    app_id: String,
    token: String,
    types: LogTypes,
});

pub_struct!(Clone, Deserialize; Platforms {
    supported: Vec<String>,
});

#[derive(Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorMode {
    Random,
    Remote,
}

pub_struct!(Clone, Deserialize; Evaluator {
    mode: EvaluatorMode,
    server: Option<String>,
});

pub_struct!(Clone, Deserialize; Config {
    server: Server,
    watchtower: Watchtower,
    platforms: Platforms,
    evaluator: Evaluator,
});

pub fn load() -> Config {
    let args: Vec<String> = env::args().collect();
    let config_path = if args.len() <= 1 {
        "config.toml"
    } else {
        args.get(1).unwrap()
    };
    let file_contents = fs::read_to_string(config_path);
    if file_contents.is_err() {
        panic!("error: unable to read file with path \"{}\"", config_path);
    }

    match toml::from_str(file_contents.unwrap().as_str()) {
        Ok(loaded) => loaded,
        Err(err) => {
            panic!("error: unable to deserialize config. {}", err);
        }
    }
}

mod crawler;
mod logger;
mod weibo;

use serde::{Deserialize, Serialize};
use std::fs;

use clap::Parser;
use crawler::Crawler;
use logger::{Logger, Logging};
use weibo::{fetch_hot_list, render_hot_list};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 5)]
    log_level: u8,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Config {
    #[serde(alias = "COOKIE")]
    cookie: String,
}

fn read_config(path: &str, logger: &Logger) -> Config {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Config>(&contents) {
            Ok(config) => {
                logger.debug(&format!(
                    "cookie parsed as '{}' from '{path}'",
                    config.cookie
                ));
                return config;
            }
            Err(_) => {
                logger.warn("配置文件格式不正确，热搜页可能跳转到登录页");
                return Config {
                    cookie: "".to_owned(),
                };
            }
        },
        Err(_) => {
            logger.warn(&format!("找不到配置文件 '{path}', 热搜页可能跳转到登录页"));
            return Config {
                cookie: "".to_owned(),
            };
        }
    }
}

#[tokio::main]
async fn main() {
    let args: Args = Args::parse();
    let logger = Logger::new(args.log_level);
    logger.debug(&format!("args are: {:#?}", args));

    let config = read_config("./config.json", &logger);
    let crawler = Crawler::new(&config.cookie, &logger);
    let hot_list = fetch_hot_list(&crawler, &logger).await;
    println!("{}", render_hot_list(&hot_list));
}

use anyhow::Result;
use scraper::{Html, Selector};

use crate::crawler::Fetching;
use crate::logger::Logging;

const HOT_SEARCH_URL: &str = "https://s.weibo.com/top/summary";
// 网站结构可能变化，需定期维护
const HOT_ITEM_SELECTOR: &str = ".td-02 a";
const MAX_HOT_ITEMS: usize = 10;

fn extract_hot_titles(document: &Html) -> Vec<String> {
    let title_selector = Selector::parse(HOT_ITEM_SELECTOR).unwrap();
    let mut titles: Vec<String> = Vec::new();
    for title_element in document.select(&title_selector) {
        if titles.len() == MAX_HOT_ITEMS {
            break;
        }
        titles.push(title_element.text().collect::<Vec<_>>().join(""));
    }
    titles
}

async fn try_fetch_hot_list<F: Fetching>(crawler: &F) -> Result<Vec<String>> {
    let body_bytes = crawler.fetch_body(HOT_SEARCH_URL).await?;
    let body_str = std::str::from_utf8(&body_bytes)?;
    let document = Html::parse_document(body_str);
    Ok(extract_hot_titles(&document))
}

pub async fn fetch_hot_list<T: Logging, F: Fetching>(crawler: &F, logger: &T) -> Vec<String> {
    match try_fetch_hot_list(crawler).await {
        Ok(titles) => {
            logger.info(&format!("抓取到 {} 条热搜", titles.len()));
            titles
        }
        Err(error) => {
            logger.warn(&format!("获取数据失败: {error}"));
            Vec::new()
        }
    }
}

pub fn render_hot_list(hot_list: &[String]) -> String {
    let mut lines = vec![String::from("当前微博热搜TOP10：")];
    for (index, title) in hot_list.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, title));
    }
    lines.join("\n")
}

use crate::core::{CardTask, Menu};
use crate::utils::error::{Result, SyncError};
use url::Url;

/// Builds `<cards-base>/<menuId>` with an optional `?subMenuId=` query.
///
/// Ids are inserted as rendered text without escaping; the HTTP client
/// normalises the result when it parses the URL.
pub fn card_url(cards_base: &str, menu_id: &str, sub_menu_id: Option<&str>) -> String {
    let base = cards_base.strip_suffix('/').unwrap_or(cards_base);
    match sub_menu_id {
        Some(sub_id) => format!("{}/{}?subMenuId={}", base, menu_id, sub_id),
        None => format!("{}/{}", base, menu_id),
    }
}

/// One task per submenu for menus that have them, otherwise one per menu,
/// in menu order then submenu order.
pub fn plan_card_tasks(menus: &[Menu], cards_endpoint: &str) -> Result<Vec<CardTask>> {
    let cards_base = Url::parse(cards_endpoint)?;
    if cards_base.cannot_be_a_base() {
        return Err(SyncError::ConfigError {
            message: format!("cards endpoint cannot be used as a base URL: {}", cards_base),
        });
    }

    let mut tasks = Vec::new();

    for menu in menus {
        let menu_id = menu.id_text();
        if menu.has_sub_menus() {
            for sub in menu.sub_menus() {
                tasks.push(CardTask {
                    menu_name: menu.name_text(),
                    sub_menu_name: Some(sub.name_text()),
                    url: card_url(cards_endpoint, &menu_id, Some(&sub.id_text())),
                });
            }
        } else {
            tasks.push(CardTask {
                menu_name: menu.name_text(),
                sub_menu_name: None,
                url: card_url(cards_endpoint, &menu_id, None),
            });
        }
    }

    Ok(tasks)
}

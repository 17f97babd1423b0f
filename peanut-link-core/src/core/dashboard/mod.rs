//! Created-links dashboard
//!
//! Loads the links a wallet has created, asks the link SDK for each one's
//! deposit details and turns the answers into rows. Fetches run concurrently
//! and rows arrive in completion order, not storage order.

use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;

use crate::domain::entities::{DashboardItem, StoredLink};
use crate::domain::repositories::{LinkDetailsSource, LinkRepository};
use crate::shared::error::LinkError;

/// What the dashboard should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum DashboardView {
    /// No wallet is connected
    NotConnected,
    /// The wallet has not created any link yet
    NoLinks,
    Links(Vec<DashboardItem>),
}

pub struct Dashboard<'a> {
    links: &'a dyn LinkRepository,
    details: &'a dyn LinkDetailsSource,
}

impl<'a> Dashboard<'a> {
    pub fn new(links: &'a dyn LinkRepository, details: &'a dyn LinkDetailsSource) -> Self {
        Self { links, details }
    }

    /// Links stored for `creator`.
    pub async fn stored_links(&self, creator: &str) -> Result<Vec<StoredLink>, LinkError> {
        self.links.links_for(creator).await
    }

    /// Fetch details for every link concurrently. A link that has no chain
    /// parameter or whose fetch fails is logged and left out.
    pub async fn fetch_items(&self, links: &[StoredLink]) -> Vec<DashboardItem> {
        let mut pending: FuturesUnordered<_> = links
            .iter()
            .map(|stored| async move {
                let chain_id = stored.chain_id().ok_or_else(|| {
                    LinkError::validation(format!("Link has no chain parameter: {}", stored.hash))
                })?;
                let details = self.details.link_details(chain_id, &stored.link).await?;
                Ok::<_, LinkError>(DashboardItem::from_details(stored, chain_id, details))
            })
            .collect();

        let mut items = Vec::with_capacity(links.len());
        while let Some(result) = pending.next().await {
            match result {
                Ok(item) => items.push(item),
                Err(e) => log::error!("Failed to load link details: {}", e),
            }
        }
        log::debug!("Loaded {} of {} links", items.len(), links.len());
        items
    }

    /// Everything the dashboard needs for `creator`; `None` when no wallet is connected.
    pub async fn load(&self, creator: Option<&str>) -> Result<DashboardView, LinkError> {
        let Some(creator) = creator else {
            return Ok(DashboardView::NotConnected);
        };
        let links = self.stored_links(creator).await?;
        let items = if links.is_empty() {
            Vec::new()
        } else {
            self.fetch_items(&links).await
        };
        Ok(view(true, &links, items))
    }
}

/// Pick the dashboard state. Having stored links is what matters: a wallet
/// whose fetches all failed still gets the (empty) table.
pub fn view(connected: bool, links: &[StoredLink], items: Vec<DashboardItem>) -> DashboardView {
    if !connected {
        DashboardView::NotConnected
    } else if links.is_empty() {
        DashboardView::NoLinks
    } else {
        DashboardView::Links(items)
    }
}

/// Rows as a JSON array, for download.
pub fn export_items(items: &[DashboardItem]) -> Result<String, LinkError> {
    Ok(serde_json::to_string_pretty(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkDetails;
    use crate::domain::repositories::{MemoryLinkStore, MockLinkDetailsSource, MockLinkRepository};
    use mockall::predicate::eq;

    const CREATOR: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    fn link(hash: &str, chain: u64) -> StoredLink {
        StoredLink::new(CREATOR, hash, format!("https://peanut.to/claim?c={}&v=v4.3&i=0#p={}", chain, hash))
    }

    fn details(amount: &str) -> LinkDetails {
        LinkDetails {
            token_amount: amount.to_string(),
            token_symbol: "USDC".to_string(),
            deposit_date: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_items_skips_failures() {
        let links = vec![link("0x01", 137), link("0x02", 10), link("0x03", 8453)];

        let mut source = MockLinkDetailsSource::new();
        source
            .expect_link_details()
            .withf(|chain_id, _| *chain_id == 10)
            .returning(|_, _| Err(LinkError::provider("no transport for chain 10")));
        source
            .expect_link_details()
            .withf(|chain_id, _| *chain_id != 10)
            .times(2)
            .returning(|_, _| Ok(details("5")));

        let store = MemoryLinkStore::new();
        let dashboard = Dashboard::new(&store, &source);
        let mut items = dashboard.fetch_items(&links).await;
        items.sort_by(|a, b| a.hash.cmp(&b.hash));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].hash, "0x01");
        assert_eq!(items[0].chain_id, 137);
        assert_eq!(items[1].hash, "0x03");
        assert_eq!(items[1].chain_id, 8453);
    }

    #[tokio::test]
    async fn test_link_without_chain_is_not_fetched() {
        let links = vec![StoredLink::new(CREATOR, "0x01", "https://peanut.to/claim?v=v4.3")];
        let mut source = MockLinkDetailsSource::new();
        source.expect_link_details().never();

        let store = MemoryLinkStore::new();
        let dashboard = Dashboard::new(&store, &source);
        assert!(dashboard.fetch_items(&links).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_states() {
        let store = MemoryLinkStore::new();
        let source = MockLinkDetailsSource::new();
        let dashboard = Dashboard::new(&store, &source);

        assert_eq!(dashboard.load(None).await.unwrap(), DashboardView::NotConnected);
        assert_eq!(dashboard.load(Some(CREATOR)).await.unwrap(), DashboardView::NoLinks);
    }

    #[tokio::test]
    async fn test_load_with_links() {
        let store = MemoryLinkStore::new();
        store.save_link(link("0x01", 137)).await.unwrap();

        let mut source = MockLinkDetailsSource::new();
        source
            .expect_link_details()
            .with(eq(137u64), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Ok(details("0")));

        let dashboard = Dashboard::new(&store, &source);
        match dashboard.load(Some(CREATOR)).await.unwrap() {
            DashboardView::Links(items) => {
                assert_eq!(items.len(), 1);
                assert!(items[0].claimed);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_propagates_store_errors() {
        let mut store = MockLinkRepository::new();
        store
            .expect_links_for()
            .returning(|_| Err(LinkError::storage("disk unavailable")));
        let source = MockLinkDetailsSource::new();

        let dashboard = Dashboard::new(&store, &source);
        assert!(matches!(dashboard.load(Some(CREATOR)).await, Err(LinkError::Storage(_))));
    }

    #[test]
    fn test_view_keeps_table_when_all_fetches_fail() {
        let links = vec![link("0x01", 137)];
        assert_eq!(view(true, &links, Vec::new()), DashboardView::Links(Vec::new()));
        assert_eq!(view(false, &links, Vec::new()), DashboardView::NotConnected);
    }

    #[test]
    fn test_export_items() {
        let item = DashboardItem::from_details(&link("0x01", 137), 137, details("1"));
        let json = export_items(&[item]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["chainId"], 137);
        assert_eq!(parsed[0]["date"], "Unavailable");
    }
}

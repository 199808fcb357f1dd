use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Order in which queued URLs are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Most recently discovered first (a stack)
    #[default]
    DepthFirst,
    /// Discovery order (a queue)
    BreadthFirst,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::DepthFirst => f.write_str("depth-first"),
            TraversalOrder::BreadthFirst => f.write_str("breadth-first"),
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-first" => Ok(TraversalOrder::DepthFirst),
            "breadth-first" => Ok(TraversalOrder::BreadthFirst),
            _ => Err(format!("Unknown traversal order: {}", s)),
        }
    }
}

/// Discovered-but-unvisited URLs plus the set of visited ones.
///
/// A URL moves unseen -> queued -> crawled and never back; `enqueue` refuses
/// anything already queued or crawled.
#[derive(Debug, Default)]
pub struct Frontier {
    order: TraversalOrder,
    queue: VecDeque<String>,
    queued: HashSet<String>,
    crawled: HashSet<String>,
    crawl_log: Vec<String>,
}

impl Frontier {
    pub fn new(order: TraversalOrder) -> Frontier {
        Frontier { order, ..Frontier::default() }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Queues a URL unless it has been seen. Returns true if it was added.
    pub fn enqueue(&mut self, url: &str) -> bool {
        if self.queued.contains(url) || self.crawled.contains(url) {
            return false;
        }
        self.queued.insert(url.to_string());
        self.queue.push_back(url.to_string());
        true
    }

    /// Takes the next URL according to the traversal order
    pub fn pop(&mut self) -> Option<String> {
        let url = match self.order {
            TraversalOrder::DepthFirst => self.queue.pop_back(),
            TraversalOrder::BreadthFirst => self.queue.pop_front(),
        }?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Records a visit. Returns false if the URL was already crawled.
    pub fn mark_crawled(&mut self, url: &str) -> bool {
        if !self.crawled.insert(url.to_string()) {
            return false;
        }
        if self.queued.remove(url) {
            self.queue.retain(|queued| queued != url);
        }
        self.crawl_log.push(url.to_string());
        true
    }

    pub fn is_queued(&self, url: &str) -> bool {
        self.queued.contains(url)
    }

    pub fn is_crawled(&self, url: &str) -> bool {
        self.crawled.contains(url)
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn crawled_len(&self) -> usize {
        self.crawl_log.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Crawled URLs in visit order
    pub fn crawled(&self) -> &[String] {
        &self.crawl_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_first_pops_latest() {
        let mut frontier = Frontier::new(TraversalOrder::DepthFirst);
        frontier.enqueue("/a");
        frontier.enqueue("/b");
        frontier.enqueue("/c");
        assert_eq!(frontier.pop().as_deref(), Some("/c"));
        assert_eq!(frontier.pop().as_deref(), Some("/b"));
        assert_eq!(frontier.pop().as_deref(), Some("/a"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_breadth_first_pops_in_discovery_order() {
        let mut frontier = Frontier::new(TraversalOrder::BreadthFirst);
        frontier.enqueue("/a");
        frontier.enqueue("/b");
        assert_eq!(frontier.pop().as_deref(), Some("/a"));
        frontier.enqueue("/c");
        assert_eq!(frontier.pop().as_deref(), Some("/b"));
        assert_eq!(frontier.pop().as_deref(), Some("/c"));
        assert!(frontier.is_exhausted());
    }

    #[test]
    fn test_enqueue_refuses_seen_urls() {
        let mut frontier = Frontier::new(TraversalOrder::DepthFirst);
        assert!(frontier.enqueue("/a"));
        assert!(!frontier.enqueue("/a"));
        assert_eq!(frontier.queued_len(), 1);

        let url = frontier.pop().unwrap();
        assert!(frontier.mark_crawled(&url));
        assert!(!frontier.enqueue("/a"));
        assert!(frontier.is_exhausted());
    }

    #[test]
    fn test_mark_crawled_once() {
        let mut frontier = Frontier::new(TraversalOrder::DepthFirst);
        assert!(frontier.mark_crawled("/a"));
        assert!(!frontier.mark_crawled("/a"));
        assert_eq!(frontier.crawled(), ["/a".to_string()]);
        assert!(frontier.is_crawled("/a"));
    }

    #[test]
    fn test_mark_crawled_removes_from_queue() {
        let mut frontier = Frontier::new(TraversalOrder::DepthFirst);
        frontier.enqueue("/a");
        frontier.enqueue("/b");
        frontier.mark_crawled("/a");
        assert!(!frontier.is_queued("/a"));
        assert_eq!(frontier.queued_len(), 1);
        assert_eq!(frontier.pop().as_deref(), Some("/b"));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("breadth-first".parse::<TraversalOrder>(), Ok(TraversalOrder::BreadthFirst));
        assert_eq!("depth-first".parse::<TraversalOrder>(), Ok(TraversalOrder::DepthFirst));
        assert!("random".parse::<TraversalOrder>().is_err());
        assert_eq!(TraversalOrder::default().to_string(), "depth-first");
    }
}

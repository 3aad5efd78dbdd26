use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Adapter,
    Facade,
    Observer,
    Proxy,
    Singleton,
    Strategy,
    Visitor,
}

impl PageKind {
    /// Every page, in collection order
    pub const ALL: [PageKind; 7] = [
        PageKind::Adapter,
        PageKind::Facade,
        PageKind::Observer,
        PageKind::Proxy,
        PageKind::Singleton,
        PageKind::Strategy,
        PageKind::Visitor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageKind::Adapter => "adapter",
            PageKind::Facade => "facade",
            PageKind::Observer => "observer",
            PageKind::Proxy => "proxy",
            PageKind::Singleton => "singleton",
            PageKind::Strategy => "strategy",
            PageKind::Visitor => "visitor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|page| page.name().eq_ignore_ascii_case(name))
    }

    /// Parses a comma separated list of page names, or "all"
    pub fn parse_list(list: &str) -> Result<Vec<Self>, Box<dyn Error>> {
        if list.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::ALL.to_vec());
        }
        let pages = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                Self::from_name(name).ok_or_else(|| format!("{:?} is not a page", name))
            })
            .collect::<Result<Vec<Self>, String>>()?;
        if pages.is_empty() {
            Err("selects no pages".into())
        } else {
            Ok(pages)
        }
    }

    pub fn run(self, ctx: &PageContext) -> Result<(), Box<dyn Error>> {
        match self {
            PageKind::Adapter => adapter::run(ctx),
            PageKind::Facade => facade::run(ctx),
            PageKind::Observer => observer_page::run(ctx),
            PageKind::Proxy => proxy::run(ctx),
            PageKind::Singleton => singleton::run(ctx),
            PageKind::Strategy => strategy::run(ctx),
            PageKind::Visitor => visitor::run(ctx),
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

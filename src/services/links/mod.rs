use anyhow::{Context, Result};

/// Official International Men's Day website.
pub const LEARN_MORE_URL: &str = "https://internationalmensday.com/";

/// Something that can show a URL to the user.
#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs in the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).with_context(|| format!("Failed to open {} in browser", url))
    }
}

/// Service behind the "Learn More" button.
pub struct LinkService<O: UrlOpener = SystemBrowser> {
    opener: O,
}

impl LinkService<SystemBrowser> {
    pub fn new() -> Self {
        Self::with_opener(SystemBrowser)
    }
}

impl Default for LinkService<SystemBrowser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: UrlOpener> LinkService<O> {
    pub fn with_opener(opener: O) -> Self {
        Self { opener }
    }

    /// Fire-and-forget open of the learn-more page.
    pub fn open_learn_more(&self) -> Result<()> {
        log::info!("Opening {}", LEARN_MORE_URL);
        self.opener.open(LEARN_MORE_URL)
    }
}

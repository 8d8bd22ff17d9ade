//! Display and table configuration options.

use alloc::string::String;

/// How [`display_hand`](crate::eval::display_hand) renders a hand.
///
/// Use the presets or the builder methods:
///
/// ```
/// use trickdeck::DisplayStyle;
///
/// let style = DisplayStyle::dotted().with_void_symbol("-");
/// assert_eq!(style.separator, ".");
/// assert_eq!(style.void_symbol, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayStyle {
    /// Text placed between suit segments.
    pub separator: String,
    /// Text rendered for a suit with no cards.
    pub void_symbol: String,
}

impl DisplayStyle {
    /// Suits joined by `.`, voids left empty (`"J.Q..AK"`).
    #[must_use]
    pub fn dotted() -> Self {
        Self {
            separator: ".".into(),
            void_symbol: String::new(),
        }
    }

    /// Suits concatenated, voids shown as `-` (`"JQ-AK"`).
    #[must_use]
    pub fn compact() -> Self {
        Self {
            separator: String::new(),
            void_symbol: "-".into(),
        }
    }

    /// Sets the separator between suit segments.
    ///
    /// # Example
    ///
    /// ```
    /// use trickdeck::DisplayStyle;
    ///
    /// let style = DisplayStyle::default().with_separator("|");
    /// assert_eq!(style.separator, "|");
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the text rendered for a void suit.
    #[must_use]
    pub fn with_void_symbol(mut self, void_symbol: impl Into<String>) -> Self {
        self.void_symbol = void_symbol.into();
        self
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::dotted()
    }
}

/// Configuration for a [`Table`](crate::Table).
///
/// ```
/// use trickdeck::TableOptions;
///
/// let options = TableOptions::default()
///     .with_dealer_offset(2)
///     .with_rotate_dealer(false);
/// assert_eq!(options.dealer_offset, 2);
/// assert!(!options.rotate_dealer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Seat rotation applied to the first deal.
    pub dealer_offset: usize,
    /// Whether the deal passes to the next seat after every deal.
    pub rotate_dealer: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_offset: 0,
            rotate_dealer: true,
        }
    }
}

impl TableOptions {
    /// Sets the seat rotation of the first deal.
    #[must_use]
    pub const fn with_dealer_offset(mut self, offset: usize) -> Self {
        self.dealer_offset = offset;
        self
    }

    /// Sets whether the dealer rotates after each deal.
    #[must_use]
    pub const fn with_rotate_dealer(mut self, rotate: bool) -> Self {
        self.rotate_dealer = rotate;
        self
    }
}

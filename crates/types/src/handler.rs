use core::fmt;

/// The closed set of handlers a chain can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandlerName {
    Foo,
    Bar,
    Boo,
}

impl HandlerName {
    pub const COUNT: usize = 3;

    pub const ALL: [HandlerName; Self::COUNT] =
        [HandlerName::Foo, HandlerName::Bar, HandlerName::Boo];

    pub const fn as_str(self) -> &'static str {
        match self {
            HandlerName::Foo => "foo",
            HandlerName::Bar => "bar",
            HandlerName::Boo => "boo",
        }
    }

    /// Dense index, used for fixed-size per-handler tables.
    pub const fn index(self) -> usize {
        match self {
            HandlerName::Foo => 0,
            HandlerName::Bar => 1,
            HandlerName::Boo => 2,
        }
    }

    /// Exact, case-sensitive match of a token against the handler names.
    pub fn lookup(token: &str) -> Option<HandlerName> {
        Self::ALL.into_iter().find(|name| name.as_str() == token)
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

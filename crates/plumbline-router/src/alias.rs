/// Built-in placeholder type tags
///
/// Each variant maps the short tag written after the colon in `{name:tag}`
/// to the regex fragment it stands for. A placeholder without a tag uses
/// [`TypeAlias::Default`].
///
/// # Examples
///
/// ```
/// use plumbline_router::TypeAlias;
///
/// assert_eq!(TypeAlias::from_tag("d"), Some(TypeAlias::Digits));
/// assert_eq!(TypeAlias::from_tag("alnum").map(|a| a.fragment()), Some("[A-Za-z0-9]+"));
/// assert_eq!(TypeAlias::from_tag(r"\d{4}"), None); // custom regex, not an alias
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeAlias {
    /// `i`: integer
    Int,
    /// `d`: digits
    Digits,
    /// `a`: ASCII letters
    Alpha,
    /// `alnum`: ASCII letters and digits
    AlphaNum,
    /// `w`: word characters
    Word,
    /// Empty tag: word characters and hyphens
    Default,
}

impl TypeAlias {
    /// Every built-in alias, in table order
    pub const ALL: [TypeAlias; 6] = [
        TypeAlias::Int,
        TypeAlias::Digits,
        TypeAlias::Alpha,
        TypeAlias::AlphaNum,
        TypeAlias::Word,
        TypeAlias::Default,
    ];

    /// Looks up a built-in alias by its tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "i" => Some(TypeAlias::Int),
            "d" => Some(TypeAlias::Digits),
            "a" => Some(TypeAlias::Alpha),
            "alnum" => Some(TypeAlias::AlphaNum),
            "w" => Some(TypeAlias::Word),
            "" => Some(TypeAlias::Default),
            _ => None,
        }
    }

    /// The tag this alias is written as
    pub fn tag(self) -> &'static str {
        match self {
            TypeAlias::Int => "i",
            TypeAlias::Digits => "d",
            TypeAlias::Alpha => "a",
            TypeAlias::AlphaNum => "alnum",
            TypeAlias::Word => "w",
            TypeAlias::Default => "",
        }
    }

    /// The regex fragment substituted into the capture group
    pub fn fragment(self) -> &'static str {
        match self {
            TypeAlias::Int | TypeAlias::Digits => r"\d+",
            TypeAlias::Alpha => "[A-Za-z]+",
            TypeAlias::AlphaNum => "[A-Za-z0-9]+",
            TypeAlias::Word => r"\w+",
            TypeAlias::Default => r"[-\w]+",
        }
    }
}

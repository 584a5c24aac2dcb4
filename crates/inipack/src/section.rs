use bstr::BStr;

use crate::{
    cursor::{Cursor, Record, Records},
    ini::find,
    numbers::{Lenient, parse_lenient},
};

/// The records of one section, from [`Ini::section`](crate::Ini::section).
///
/// ```rust
/// use inipack::Ini;
///
/// let ini = Ini::parse("[pins]\nled = 13\nbutton = 2\n[other]\nled = 4\n")?;
/// let pins = ini.section("pins");
/// assert_eq!(pins.get_as::<u8>("led"), 13);
/// for record in &pins {
///     assert_eq!(record.section.unwrap(), "pins");
/// }
/// # Ok::<(), inipack::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    begin: Cursor<'a>,
    end: Cursor<'a>,
}

impl<'a> Section<'a> {
    pub(crate) fn new(begin: Cursor<'a>, end: Cursor<'a>) -> Self {
        Self { begin, end }
    }

    /// Cursor on the first record of the view.
    #[must_use]
    pub fn begin(&self) -> Cursor<'a> {
        self.begin
    }

    /// Cursor one past the last record of the view.
    #[must_use]
    pub fn end(&self) -> Cursor<'a> {
        self.end
    }

    /// Whether the view holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }

    /// Records of the view in source order.
    #[must_use]
    pub fn iter(&self) -> Records<'a> {
        Records::new(self.begin, self.end)
    }

    /// Value of the first record in the view with key `key`, or the empty
    /// value.
    #[must_use]
    pub fn get(&self, key: &str) -> &'a BStr {
        find(self.iter(), key)
    }

    /// [`get`](Self::get) converted with [`parse_lenient`]; zero when absent.
    #[must_use]
    pub fn get_as<T: Lenient>(&self, key: &str) -> T {
        parse_lenient(self.get(key))
    }

    /// Whether the view has a record with key `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }
}

impl<'a> IntoIterator for Section<'a> {
    type Item = Record<'a>;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Section<'a> {
    type Item = Record<'a>;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::Ini;

    #[test]
    fn empty_and_missing_sections_yield_nothing() {
        let ini = Ini::parse("[empty]\n[full]\nk=v\n").unwrap();
        assert!(ini.section("empty").is_empty());
        assert!(ini.section("missing").is_empty());
        assert_eq!(ini.section("full").iter().count(), 1);
    }

    #[test]
    fn section_names_keep_their_inner_whitespace() {
        let ini = Ini::parse("[ spaced name ]\nk=v\n").unwrap();
        assert_eq!(ini.get_in(" spaced name ", "k"), "v");
        assert_eq!(ini.get_in("spaced name", "k"), "");
    }

    #[test]
    fn view_ends_where_the_next_header_starts() {
        let ini = Ini::parse("[a]\nx=1\ny=2\n[b]\nz=3\n[a]\nw=4\n").unwrap();
        let a = ini.section("a");
        let keys: Vec<_> = a.into_iter().map(|r| r.key).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(a.end().record().unwrap().key, "z");
        assert!(!a.contains("w"));
        assert_eq!(a.get_as::<i64>("y"), 2);
    }
}

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::TokenKind;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("agar", TokenKind::ReservedWord); // if
        map.insert("warna", TokenKind::ReservedWord); // else
        map.insert("dobara", TokenKind::ReservedWord); // while
        map.insert("roko", TokenKind::ReservedWord); // break
        map.insert("wapas", TokenKind::ReservedWord); // return
        map.insert("mukarrar", TokenKind::ReservedWord); // const
        map
    };
    pub static ref DATA_TYPE_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("adad", TokenKind::DataType); // number
        map.insert("lafz", TokenKind::DataType); // string
        map.insert("boolean", TokenKind::DataType);
        map.insert("nishan", TokenKind::DataType); // character
        map.insert("khaali", TokenKind::DataType); // void
        map.insert("fahrist", TokenKind::DataType); // array
        map.insert("sancha", TokenKind::DataType); // class
        map
    };
    pub static ref BOOLEAN_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("sahi", TokenKind::Boolean);
        map.insert("ghalat", TokenKind::Boolean);
        map
    };
    pub static ref TWO_CHAR_OPERATORS: HashSet<&'static str> =
        HashSet::from([":=", "**", "==", "!=", "<=", ">=", "&&", "||"]);
    pub static ref ONE_CHAR_OPERATORS: HashSet<&'static str> =
        HashSet::from(["+", "-", "*", "/", "%", "<", ">", "!"]);
    pub static ref ELEMENT_IDENTIFIER: Regex =
        Regex::new("^(?:H|He|Li|Be|B|C|N|O|F|Ne|Na|Mg|Al|Si|P|S|Cl|Ar)_[0-9]{1,2}$").unwrap();
}

/// Membership query over the word tables in their fixed priority order:
/// reserved words, then data types, then boolean literals. Operators are
/// never consulted here.
pub fn lookup_word(text: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP
        .get(text)
        .or_else(|| DATA_TYPE_LOOKUP.get(text))
        .or_else(|| BOOLEAN_LOOKUP.get(text))
        .copied()
}

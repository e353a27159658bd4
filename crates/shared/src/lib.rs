//! Static storefront content shared by the web crate

/// Static site configuration
pub struct Config {
    pub name: &'static str,
    /// BCP 47 tag of the copy below
    pub lang: &'static str,

    pub virtual_shop: SectionCopy,
}

/// Heading and body text for a single page section
pub struct SectionCopy {
    pub title: &'static str,
    pub description: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Virtuálny obchod",
    lang: "sk",

    virtual_shop: SectionCopy {
        title: "Virtuálny obchod",
        description: "Preskúmajte náš virtuálny obchod a objavte široký sortiment produktov",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_shop_title() {
        assert_eq!(CONFIG.virtual_shop.title, "Virtuálny obchod");
    }

    #[test]
    fn test_virtual_shop_description() {
        assert_eq!(
            CONFIG.virtual_shop.description,
            "Preskúmajte náš virtuálny obchod a objavte široký sortiment produktov"
        );
    }

    #[test]
    fn test_copy_is_slovak() {
        assert_eq!(CONFIG.lang, "sk");
        // Diacritics must survive as UTF-8, not escaped
        assert!(CONFIG.virtual_shop.title.contains('á'));
        assert!(CONFIG.virtual_shop.description.contains('ú'));
    }
}

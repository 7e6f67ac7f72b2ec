use rand::Rng;
use serde::{ Deserialize, Serialize };

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Concatenation order used when building an alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => NUMBERS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "numbers",
            CharClass::Symbol => "symbols",
        }
    }
}

/// The four independent "Include ..." toggles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl ClassSet {
    pub fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }

    #[cfg(test)]
    pub fn from_classes(classes: &[CharClass]) -> Self {
        let mut set = Self::default();
        for class in classes {
            set.set(*class, true);
        }
        set
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.uppercase,
            CharClass::Lower => self.lowercase,
            CharClass::Digit => self.numbers,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Upper => self.uppercase = enabled,
            CharClass::Lower => self.lowercase = enabled,
            CharClass::Digit => self.numbers = enabled,
            CharClass::Symbol => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.numbers || self.symbols)
    }

    /// Enabled classes in alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|class| self.contains(*class))
    }

    /// Upper, lower, digits, symbols; disabled classes contribute nothing.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled()
            .flat_map(|class| class.chars().chars())
            .collect()
    }
}

pub fn pick_char<R: Rng + ?Sized>(rng: &mut R, alphabet: &[char]) -> char {
    let chosen_index = rng.random_range(0..alphabet.len());

    alphabet[chosen_index]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn alphabet_follows_fixed_order() {
        let set = ClassSet::all();
        let expected: String = [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS].concat();

        assert_eq!(set.alphabet().into_iter().collect::<String>(), expected);
    }

    #[test]
    fn alphabet_order_ignores_selection_order() {
        let a = ClassSet::from_classes(&[CharClass::Symbol, CharClass::Lower]);
        let b = ClassSet::from_classes(&[CharClass::Lower, CharClass::Symbol]);

        assert_eq!(a.alphabet(), b.alphabet());
        assert_eq!(a.alphabet().into_iter().collect::<String>(), format!("{LOWERCASE}{SYMBOLS}"));
    }

    #[test]
    fn lower_and_digits_give_36_chars() {
        let set = ClassSet::from_classes(&[CharClass::Lower, CharClass::Digit]);
        assert_eq!(set.alphabet().len(), 36);
    }

    #[test]
    fn empty_set_has_empty_alphabet() {
        let set = ClassSet::default();
        assert!(set.is_empty());
        assert!(set.alphabet().is_empty());
    }

    #[test]
    fn toggle_flips_only_one_class() {
        let mut set = ClassSet::default();
        set.toggle(CharClass::Digit);
        assert!(set.numbers);
        assert!(!set.lowercase && !set.uppercase && !set.symbols);

        set.toggle(CharClass::Digit);
        assert!(set.is_empty());
    }

    #[test]
    fn enabled_lists_classes_in_alphabet_order() {
        let set = ClassSet::from_classes(&[CharClass::Symbol, CharClass::Upper]);

        assert_eq!(set.enabled().collect::<Vec<_>>(), vec![CharClass::Upper, CharClass::Symbol]);
    }

    #[test]
    fn pick_char_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet: Vec<char> = SYMBOLS.chars().collect();

        for _ in 0..200 {
            assert!(alphabet.contains(&pick_char(&mut rng, &alphabet)));
        }
    }
}

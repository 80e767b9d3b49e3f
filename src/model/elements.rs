/// Returns the atomic number (Z) for a given element symbol, or 0 if unknown.
/// Exported atoms are tagged by Z, so this backs the `--species Fe` form.
pub fn atomic_number(symbol: &str) -> u32 {
    match symbol {
        // --- Period 1 ---
        "H" => 1,
        "He" => 2,
        // --- Period 2 ---
        "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8, "F" => 9, "Ne" => 10,
        // --- Period 3 ---
        "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16, "Cl" => 17, "Ar" => 18,
        // --- Period 4 ---
        "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24, "Mn" => 25,
        "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32,
        "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
        // --- Period 5 (Selected) ---
        "Ag" => 47,
        "Au" => 79,
        _ => 0, // Unknown/Dummy
    }
}

/// Returns the element symbol for an atomic number, or "X" if unknown.
pub fn element_symbol(z: u32) -> &'static str {
    match z {
        1 => "H",
        2 => "He",
        3 => "Li", 4 => "Be", 5 => "B", 6 => "C", 7 => "N", 8 => "O", 9 => "F", 10 => "Ne",
        11 => "Na", 12 => "Mg", 13 => "Al", 14 => "Si", 15 => "P", 16 => "S", 17 => "Cl", 18 => "Ar",
        19 => "K", 20 => "Ca", 21 => "Sc", 22 => "Ti", 23 => "V", 24 => "Cr", 25 => "Mn",
        26 => "Fe", 27 => "Co", 28 => "Ni", 29 => "Cu", 30 => "Zn", 31 => "Ga", 32 => "Ge",
        33 => "As", 34 => "Se", 35 => "Br", 36 => "Kr",
        47 => "Ag",
        79 => "Au",
        _ => "X",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_to_z_and_back() {
        assert_eq!(atomic_number("Fe"), 26);
        assert_eq!(element_symbol(26), "Fe");
        assert_eq!(atomic_number("Mn"), 25);
        assert_eq!(element_symbol(atomic_number("Co")), "Co");
    }

    #[test]
    fn unknown_symbol_is_zero() {
        assert_eq!(atomic_number("Xx"), 0);
        assert_eq!(element_symbol(0), "X");
        assert_eq!(element_symbol(120), "X");
    }
}

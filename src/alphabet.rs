// Vortarkivo – A themed word search game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use rand::Rng;

pub const N_LETTERS: usize = 33;

// Letters used to fill the cells that aren’t covered by a word
pub static LETTERS: [char; N_LETTERS] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й',
    'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф',
    'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

pub fn contains(ch: char) -> bool {
    LETTERS.contains(&ch)
}

pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    LETTERS[rng.gen_range(0..N_LETTERS)]
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn all_different() {
        let letters = LETTERS.iter().collect::<HashSet<_>>();
        assert_eq!(letters.len(), N_LETTERS);
        assert!(LETTERS.iter().all(|ch| ch.is_uppercase()));
    }

    #[test]
    fn random_letters_are_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            assert!(contains(random_letter(&mut rng)));
        }

        assert!(!contains('A'));
        assert!(!contains('а'));
    }
}

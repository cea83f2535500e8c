use std::vec::IntoIter;


/// Non-empty trimmed lines of a recipe; `#` comments are skipped.
pub struct LinesIter<'text> {
    iter: IntoIter<&'text str>
}

impl<'text> LinesIter<'text> {
    pub fn new(text: &'text str) -> Self {
        let lines: Vec<&str> = text.split('\n')
            .map(|w| w.trim())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();
        let iter = lines.into_iter();
        LinesIter { iter }
    }

    pub fn len(&self) -> usize { self.iter.len() }

    pub fn is_empty(&self) -> bool { self.iter.len() == 0 }
}

impl<'text> Iterator for LinesIter<'text> {
    type Item = &'text str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}


pub struct WordsIter<'text> {
    iter: IntoIter<&'text str>
}

impl<'text> WordsIter<'text> {
    pub fn new(text: &'text str, divider: &str) -> Self {
        let words: Vec<&str> = text.split(divider)
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect();
        let iter = words.into_iter();
        WordsIter { iter }
    }

    pub fn next_or_empty(&mut self) -> &'text str {
        self.iter.next().unwrap_or("")
    }

    pub fn len(&self) -> usize { self.iter.len() }
}

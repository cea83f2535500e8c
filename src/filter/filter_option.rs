use crate::img_err::ImgError;
use crate::utils::WordsIter;


/// Comma separated parameters of one recipe line.
#[derive(Debug, Clone)]
pub struct ParamsList {
    save_name: String,
    words: Vec<String>,
}

impl ParamsList {
    pub fn try_from_string(save_name: &str, content: &str, expected_len: usize) -> Result<Self, ImgError> {
        let mut words_iter = WordsIter::new(content, ",");

        if words_iter.len() != expected_len {
            return Err(ImgError::parse(match expected_len {
                0 => format!("'{}' takes no parameters", save_name),
                n => format!("'{}' takes {} parameter(s), got {}", save_name, n, words_iter.len()),
            }));
        }

        let mut words = Vec::<String>::with_capacity(expected_len);
        for _ in 0..expected_len {
            words.push(words_iter.next_or_empty().to_string());
        }

        Ok(ParamsList { save_name: save_name.to_string(), words })
    }

    pub fn int(&self, ind: usize) -> Result<i32, ImgError> {
        self.words[ind].parse::<i32>().map_err(|_| ImgError::parse(format!(
            "'{}': parameter {} must be an integer, got '{}'", self.save_name, ind + 1, self.words[ind])))
    }

    pub fn float(&self, ind: usize) -> Result<f32, ImgError> {
        self.words[ind].parse::<f32>().map_err(|_| ImgError::parse(format!(
            "'{}': parameter {} must be a number, got '{}'", self.save_name, ind + 1, self.words[ind])))
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NormalizeOption {
    Normalized,
    NotNormalized
}

impl NormalizeOption {
    pub fn normalize(&self, values: &mut [f32]) {
        match self {
            NormalizeOption::Normalized => {
                let sum: f32 = values.iter().sum();

                if sum.abs() > f32::EPSILON {
                    for v in values.iter_mut() { *v /= sum; }
                }
            }
            NormalizeOption::NotNormalized => {}
        }
    }
}

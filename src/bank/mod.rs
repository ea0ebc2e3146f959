use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::quiz::{Question, QuestionKey, Questions, RawQuestion};


const BANK_EXTENSION: &str = "csv";

/// Every question available to sample from, in the order the bank files list them.
#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(sources: &[PathBuf]) -> Result<QuestionBank> {
        if sources.is_empty() {
            return Err(anyhow!("No question bank was specified"));
        }

        let mut bank = QuestionBank::default();
        for source in sources {
            for file in list_bank_files(source)? {
                let reader = File::open(&file)
                    .with_context(|| format!("Could not open question bank {:?}", file))?;
                let count = bank
                    .read_questions(reader)
                    .with_context(|| format!("Could not read question bank {:?}", file))?;
                info!("Loaded {} questions from {:?}", count, file);
            }
        }
        Ok(bank)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank> {
        let mut bank = QuestionBank::default();
        bank.read_questions(reader)?;
        Ok(bank)
    }

    fn read_questions<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut count = 0;
        for (index, record) in csv_reader.deserialize().enumerate() {
            // Header is line 1
            let line = index + 2;
            let raw_question: RawQuestion =
                record.with_context(|| format!("Malformed record on line {}", line))?;
            let question = Question::try_from(raw_question)
                .with_context(|| format!("Invalid question on line {}", line))?;
            self.questions.push(question);
            count += 1;
        }
        Ok(count)
    }

    pub fn list_categories(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| q.category().to_owned())
            .unique()
            .sorted()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn load_all(&self) -> Questions {
        Questions::from_questions(self.questions.clone())
    }

    pub fn load_sample(&self, count: usize, categories: &[String]) -> Result<Questions> {
        self.load_sample_with_rng(count, categories, &mut rand::thread_rng())
    }

    /// Picks up to `count` questions at random among `categories`, or among all of them if
    /// `categories` is empty. Questions keep the key they have in `load_all`.
    pub fn load_sample_with_rng<R: Rng + ?Sized>(
        &self,
        count: usize,
        categories: &[String],
        rng: &mut R,
    ) -> Result<Questions> {
        let known: HashSet<&str> = self.questions.iter().map(|q| q.category()).collect();
        for category in categories {
            if !known.contains(category.as_str()) {
                warn!("Unknown question category: {}", category);
            }
        }

        let mut pool: Vec<(QuestionKey, &Question)> = self
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| categories.is_empty() || categories.iter().any(|c| c == q.category()))
            .map(|(index, q)| (QuestionKey(index), q))
            .collect();
        pool.shuffle(rng);
        pool.truncate(count);

        let entries = pool.into_iter().map(|(key, q)| (key, q.clone())).collect();
        Ok(Questions::new(entries)?)
    }
}

fn list_bank_files(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }
    let mut files = Vec::new();
    let entries = fs::read_dir(source)
        .with_context(|| format!("Could not list question bank directory {:?}", source))?;
    for entry in entries {
        let path = entry?.path();
        let is_bank_file = path
            .extension()
            .map_or(false, |extension| extension == BANK_EXTENSION);
        if path.is_file() && is_bank_file {
            files.push(path);
        }
    }
    files.sort();
    if files.is_empty() {
        warn!("No .{} files in {:?}", BANK_EXTENSION, source);
    }
    Ok(files)
}

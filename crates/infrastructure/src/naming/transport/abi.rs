//! Minimal Solidity ABI codec for the handful of registry and resolver
//! calls the Ethereum backends make.
//!
//! Only 32-byte words (`bytes32`, `uint256`) and dynamic `string`s are
//! encoded; return values are decoded as `address`, `uint256` or `string`.

use sha3::{Digest, Keccak256};
use thiserror::Error;

const WORD: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Word([u8; 32]),
    String(&'a str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("return data too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },

    #[error("value does not fit in {0}")]
    Overflow(&'static str),

    #[error("string is not valid UTF-8")]
    InvalidUtf8,
}

pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

pub fn encode_call(signature: &str, tokens: &[Token<'_>]) -> Vec<u8> {
    let head_len = tokens.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        match token {
            Token::Word(word) => head.extend_from_slice(word),
            Token::String(value) => {
                head.extend_from_slice(&uint_word((head_len + tail.len()) as u64));
                tail.extend_from_slice(&uint_word(value.len() as u64));
                tail.extend_from_slice(value.as_bytes());
                let padding = (WORD - value.len() % WORD) % WORD;
                tail.resize(tail.len() + padding, 0);
            }
        }
    }

    let mut call = Vec::with_capacity(4 + head.len() + tail.len());
    call.extend_from_slice(&selector(signature));
    call.extend_from_slice(&head);
    call.extend_from_slice(&tail);
    call
}

fn uint_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn word_at(data: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    let end = offset.checked_add(WORD).ok_or(AbiError::Overflow("usize"))?;
    data.get(offset..end).ok_or(AbiError::TooShort {
        needed: end,
        actual: data.len(),
    })
}

fn word_as_usize(word: &[u8]) -> Result<usize, AbiError> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(AbiError::Overflow("usize"));
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(bytes)).map_err(|_| AbiError::Overflow("usize"))
}

/// Lower-case `0x`-prefixed address from the first return word.
pub fn decode_address(data: &[u8]) -> Result<String, AbiError> {
    let word = word_at(data, 0)?;
    Ok(format!("0x{}", hex::encode(&word[12..])))
}

pub fn decode_u64(data: &[u8]) -> Result<u64, AbiError> {
    let word = word_at(data, 0)?;
    if word[..24].iter().any(|b| *b != 0) {
        return Err(AbiError::Overflow("u64"));
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&word[24..]);
    Ok(u64::from_be_bytes(bytes))
}

pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    let offset = word_as_usize(word_at(data, 0)?)?;
    let len = word_as_usize(word_at(data, offset)?)?;
    let start = offset + WORD;
    let end = start.checked_add(len).ok_or(AbiError::Overflow("usize"))?;
    let bytes = data.get(start..end).ok_or(AbiError::TooShort {
        needed: end,
        actual: data.len(),
    })?;
    String::from_utf8(bytes.to_vec()).map_err(|_| AbiError::InvalidUtf8)
}

pub fn is_zero_address(address: &str) -> bool {
    let digits = address.strip_prefix("0x").unwrap_or(address);
    digits.is_empty() || digits.chars().all(|c| c == '0')
}

/// Encodes a return value the way a contract would; used by tests that fake
/// a node.
pub fn encode_return(tokens: &[Token<'_>]) -> Vec<u8> {
    encode_call("", tokens).split_off(4)
}

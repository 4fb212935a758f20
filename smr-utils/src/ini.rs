//! Staging of simulation-harness settings from an INI file into environment
//! variables, and back out again with type inference on read.
//!
//! This is ambient test-harness configuration (node count, network fault
//! parameters, logging flags) — not the protocol's own cluster
//! `Configuration`, which uses the line-oriented grammar in `smr::config`.

use ini::Ini;
use log::debug;
use std::env;
use std::fmt::Debug;
use std::fs::File;
use std::io::Read;
use std::str::FromStr;

/// Loads an ini file reference.
pub fn get_ini(path: &str) -> Ini {
    Ini::load_from_file(path).expect("Failed to open ini file")
}

/// Exports ini-value to environment.
pub fn ini2env(sec: &str, key: &str, conf: &Ini, exp_key: Option<&str>) {
    let msg = format!("no key [{}]{}", sec, key);
    let value = conf.get_from(Some(sec), key).expect(&msg).to_owned();
    debug!("{}.{} is {}", sec, key, value);
    match exp_key {
        Some(exp_key) => env::set_var(exp_key, value),
        None => env::set_var(sec.to_owned() + "." + key, value),
    }
}

/// Expects ini-value to be an ASCII file path and exports its content.
pub fn ini2env_filedata(sec: &str, key: &str, conf: &Ini, exp_key: &str) {
    let msg = format!("no key [{}]{}", sec, key);
    let value = conf.get_from(Some(sec), key).expect(&msg).to_owned();
    debug!("{}.{} is {}", sec, key, value);
    let mut filedata = vec![];
    let msg = format!("{} is not a file", value);
    let mut file = File::open(&value).expect(&msg);
    file.read_to_end(&mut filedata).unwrap();
    let msg = format!("{} is a binary file", value);
    env::set_var(exp_key, &String::from_utf8(filedata).expect(&msg));
}

/// Expects ini-value to be a file path and exports its content as base64.
pub fn ini2env_binfiledata(sec: &str, key: &str, conf: &Ini, exp_key: &str) {
    let msg = format!("no key [{}]{}", sec, key);
    let value = conf.get_from(Some(sec), key).expect(&msg).to_owned();
    debug!("{}.{} is {}", sec, key, value);
    let mut bin_filedata = vec![];
    let msg = format!("{} is not a file", value);
    let mut bin_file = File::open(value).expect(&msg);
    bin_file.read_to_end(&mut bin_filedata).unwrap();
    use base64::Engine;
    let filedata_b64 = base64::engine::general_purpose::STANDARD.encode(&bin_filedata);
    env::set_var(exp_key, &filedata_b64);
}

/// Exports ini-value to environment, given only the path to the ini.
pub fn inipath2env(sec: &str, key: &str, file_ini: &str, exp_key: Option<&str>) {
    let ini = Ini::load_from_file(file_ini).expect("Failed to open ini file");
    let msg = format!("no key [{}]{}", sec, key);
    let value = ini.get_from(Some(sec), key).expect(&msg).to_owned();
    debug!("{}.{} is {}", sec, key, value);
    match exp_key {
        Some(exp_key) => env::set_var(exp_key, value),
        None => env::set_var(sec.to_owned() + "." + key, value),
    }
}

/// Returns a typed value read straight from the ini.
pub fn inipath2var<T>(sec: &str, key: &str, file_ini: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    let msg = format!("no key [{}]{}", sec, key);
    Ini::load_from_file(file_ini)
        .expect("Failed to open ini file")
        .get_from(Some(sec), key)
        .expect(&msg)
        .parse()
        .expect("Can't parse ini value into desired variable")
}

/// Returns the value from an environment variable.
pub fn env2var<T>(exp_key: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    let msg_miss = format!("No {} as environment variable set", exp_key);
    let msg_parse = format!("Can't parse {} into desired variable", exp_key);
    env::var(exp_key).expect(&msg_miss).parse().expect(&msg_parse)
}

/// Returns the vector-value from an environment variable (whitespace separated).
pub fn env2var_vec<T>(exp_key: &str) -> Vec<T>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    let msg_miss = format!("No {} as environment variable set", exp_key);
    let msg_parse = format!("Can't parse {} into desired variable", exp_key);
    let vec_strings = env::var(exp_key).expect(&msg_miss);

    let mut result: Vec<T> = Vec::new();
    for e_string in vec_strings.split_whitespace() {
        result.push(e_string.parse().expect(&msg_parse));
    }
    result
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn ramal() -> Command {
    let mut cmd = cargo_bin_cmd!("ramal");
    // Keep the ambient environment from leaking a data path into tests
    cmd.env_remove("RAMAL_DATA");
    cmd
}

/// Two lines crossing at CENTRO:
///
/// line 1 runs NORTE(0,8) - CENTRO(0,4) - SUR(0,0),
/// line 2 runs OESTE(-4,4) - CENTRO(0,4) - ESTE(4,4).
pub const SAMPLE_NETWORK: &str = "\
id,name,line,x,y
0,NORTE,1,0.0,8.0
1,CENTRO,1,0.0,4.0
2,SUR,1,0.0,0.0
3,OESTE,2,-4.0,4.0
4,CENTRO,2,0.0,4.0
5,ESTE,2,4.0,4.0
";

#[allow(dead_code)]
pub fn write_sample_network(dir: &Path) -> PathBuf {
    write_network(dir, SAMPLE_NETWORK)
}

#[allow(dead_code)]
pub fn write_network(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("stations.csv");
    fs::write(&path, contents).expect("failed to write station fixture");
    path
}

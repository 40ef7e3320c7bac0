//! # npsrc 预设
//!
//! `*.yml` / `*.yaml` → `*.json`，内容原样输出。

use crate::pipeline::matcher::{JSON_EXTENSION, YAML_EXTENSIONS};
use crate::presets::Preset;
use crate::transform::{pass_through, ExtensionSwap};

pub fn preset() -> Preset {
    Preset {
        filename: Box::new(ExtensionSwap::new(YAML_EXTENSIONS, JSON_EXTENSION)),
        content: pass_through(),
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::LicenseTemplate;

/// The fixed set of known license templates used as comparison targets.
///
/// Entries keep their source insertion order; ties in candidate ranking fall
/// back to this order, so it must be stable across runs.
#[derive(Debug, Clone)]
pub struct Catalogue {
    templates: Vec<LicenseTemplate>,
}

/// On-disk value shape: the catalogue file is a JSON object keyed by
/// license id, `{"MIT": {"name": ..., "spdx_id": ..., ...}, ...}`.
#[derive(Debug, Deserialize)]
struct TemplateBody {
    name: Option<String>,
    spdx_id: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    template: String,
}

impl Catalogue {
    /// Load the catalogue from `path`, falling back to the built-in template
    /// table on any failure. Load failures never surface to callers.
    pub fn load_or_default(path: Option<&Path>) -> Catalogue {
        match path {
            Some(p) => Self::from_file(p).unwrap_or_default(),
            None => Catalogue::default(),
        }
    }

    /// Parse a catalogue JSON file. Object key order is preserved.
    pub fn from_file(path: &Path) -> Result<Catalogue> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalogue file {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Catalogue> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(content).context("catalogue is not a JSON object")?;

        let mut templates = Vec::with_capacity(map.len());
        for (id, value) in map {
            let body: TemplateBody = serde_json::from_value(value)
                .with_context(|| format!("invalid catalogue entry {id:?}"))?;
            templates.push(LicenseTemplate {
                name: body.name.unwrap_or_else(|| id.clone()),
                spdx_id: body.spdx_id.unwrap_or_else(|| id.clone()),
                keywords: body.keywords,
                template: body.template,
                id,
            });
        }

        Ok(Catalogue { templates })
    }

    /// Templates in catalogue insertion order.
    pub fn templates(&self) -> &[LicenseTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[cfg(test)]
    pub fn from_templates(templates: Vec<LicenseTemplate>) -> Catalogue {
        Catalogue { templates }
    }
}

impl Default for Catalogue {
    /// Built-in templates for six common licenses, used when no catalogue
    /// file is available.
    fn default() -> Self {
        let entry = |id: &str, name: &str, keywords: &[&str], template: &str| LicenseTemplate {
            id: id.to_string(),
            name: name.to_string(),
            spdx_id: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            template: template.to_string(),
        };

        Catalogue {
            templates: vec![
                entry(
                    "MIT",
                    "MIT License",
                    &[
                        "MIT",
                        "Massachusetts Institute of Technology",
                        "Permission is hereby granted",
                    ],
                    "Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files",
                ),
                entry(
                    "Apache-2.0",
                    "Apache License 2.0",
                    &[
                        "Apache",
                        "Apache License",
                        "Version 2.0",
                        "Licensed under the Apache License",
                    ],
                    "Licensed under the Apache License, Version 2.0 (the \"License\"); you may not use this file except in compliance with the License",
                ),
                entry(
                    "GPL-2.0",
                    "GNU General Public License v2.0",
                    &[
                        "GPL",
                        "GNU General Public License",
                        "Version 2",
                        "This program is free software",
                    ],
                    "This program is free software; you can redistribute it and/or modify it under the terms of the GNU General Public License",
                ),
                entry(
                    "GPL-3.0",
                    "GNU General Public License v3.0",
                    &[
                        "GPL",
                        "GNU General Public License",
                        "Version 3",
                        "This program is free software",
                    ],
                    "This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation",
                ),
                entry(
                    "BSD-3-Clause",
                    "BSD 3-Clause License",
                    &[
                        "BSD",
                        "3-Clause",
                        "Redistribution and use in source and binary forms",
                    ],
                    "Redistribution and use in source and binary forms, with or without modification, are permitted provided that the following conditions are met",
                ),
                entry(
                    "LGPL-2.1",
                    "GNU Lesser General Public License v2.1",
                    &["LGPL", "Lesser General Public License", "Version 2.1"],
                    "This library is free software; you can redistribute it and/or modify it under the terms of the GNU Lesser General Public License",
                ),
            ],
        }
    }
}

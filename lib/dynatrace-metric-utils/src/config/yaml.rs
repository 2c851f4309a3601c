/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use super::MetricsExportConfig;
use crate::Dimension;
use crate::api::PAYLOAD_LINES_LIMIT;

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(value) => Ok(*value),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' or 'string'"
        )),
    }
}

fn as_line_count(v: &Yaml) -> anyhow::Result<usize> {
    let lines = match v {
        Yaml::String(s) => usize::from_str(s)?,
        Yaml::Integer(i) => usize::try_from(*i)?,
        _ => return Err(anyhow!("line count should be a positive integer")),
    };
    if lines == 0 || lines > PAYLOAD_LINES_LIMIT {
        return Err(anyhow!(
            "line count {lines} is out of range 1..={PAYLOAD_LINES_LIMIT}"
        ));
    }
    Ok(lines)
}

impl MetricsExportConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = MetricsExportConfig::default();
            foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'metrics export config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "endpoint" | "url" => {
                let endpoint = as_string(v).context(format!("invalid string value for key {k}"))?;
                if endpoint.is_empty() {
                    return Err(anyhow!("empty endpoint for key {k}"));
                }
                self.endpoint = endpoint;
            }
            "prefix" => {
                let prefix = as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_prefix(prefix);
            }
            "default_dimensions" | "dimensions" => {
                let Yaml::Hash(map) = v else {
                    return Err(anyhow!("yaml value type for key {k} should be 'map'"));
                };
                foreach_kv(map, |name, value| {
                    let value = as_string(value)?;
                    self.default_dimensions.push(Dimension::new(name, value));
                    Ok(())
                })
                .context(format!("invalid dimensions value for key {k}"))?;
            }
            "oneagent_enrichment" | "enrich_with_oneagent_metadata" => {
                self.enrich_with_oneagent_metadata =
                    as_bool(v).context(format!("invalid bool value for key {k}"))?;
            }
            "max_lines_per_request" => {
                self.max_lines_per_request =
                    as_line_count(v).context(format!("invalid line count value for key {k}"))?;
            }
            _ => return Err(anyhow!("invalid key {k}")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    fn yaml_doc(s: &str) -> Yaml {
        YamlLoader::load_from_str(s).unwrap().pop().unwrap()
    }

    #[test]
    fn parse_yaml_ok() {
        let yaml = yaml_doc(
            r#"
                endpoint: "https://example.live.dynatrace.com/api/v2/metrics/ingest"
                prefix: "my.app"
                default_dimensions:
                  env: prod
                  Team: core
                  version: 3
                oneagent-enrichment: false
                max_lines_per_request: 500
            "#,
        );
        let config = MetricsExportConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(
            config.endpoint(),
            "https://example.live.dynatrace.com/api/v2/metrics/ingest"
        );
        assert_eq!(config.prefix(), Some("my.app"));
        assert!(!config.enrich_with_oneagent_metadata());
        assert_eq!(config.max_lines_per_request(), 500);

        let preset = config.static_dimensions();
        assert_eq!(
            preset.default_dimensions().to_string(),
            "env=prod,team=core,version=3"
        );

        let yaml = yaml_doc("prefix: app");
        let config = MetricsExportConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.endpoint(), crate::api::DEFAULT_ONEAGENT_ENDPOINT);
        assert!(config.enrich_with_oneagent_metadata());
        assert_eq!(config.max_lines_per_request(), PAYLOAD_LINES_LIMIT);

        let yaml = yaml_doc("max-lines-per-request: \"1000\"");
        let config = MetricsExportConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.max_lines_per_request(), 1000);
    }

    #[test]
    fn parse_yaml_err() {
        let yaml = yaml_doc("invalid_key: value");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("endpoint: \"\"");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("default_dimensions: [a, b]");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("oneagent_enrichment: maybe");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("max_lines_per_request: 0");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("max_lines_per_request: 1001");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("max_lines_per_request: -1");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc("max_lines_per_request: [1]");
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());

        let yaml = Yaml::Array(vec![]);
        assert!(MetricsExportConfig::parse_yaml(&yaml).is_err());
    }
}

//! Static table of known variables

// standard library
use std::collections::HashMap;
use std::sync::OnceLock;

/// Display metadata for a single variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    /// Name as written in FLASH output
    pub name: &'static str,
    /// LaTeX label
    pub label: Option<&'static str>,
    /// LaTeX unit
    pub unit: Option<&'static str>,
    /// Whether a log scale axis is preferred, if there is a preference
    pub log: Option<bool>,
}

impl Variable {
    const fn new(
        name: &'static str,
        label: Option<&'static str>,
        unit: Option<&'static str>,
        log: Option<bool>,
    ) -> Self {
        Self {
            name,
            label,
            unit,
            log,
        }
    }
}

#[rustfmt::skip]
const VARIABLES: &[Variable] = &[
    Variable::new("time",             Some(r"$t$"),                         Some(r"$\mathrm{s}$"),                      Some(false)),
    Variable::new("r",                Some(r"$r$"),                         Some(r"$\mathrm{cm}$"),                     Some(true)),
    Variable::new("mass",             Some(r"$M$"),                         Some(r"$M_\odot$"),                         None),
    Variable::new("dens",             Some(r"$\rho$"),                      Some(r"$\mathrm{g\,cm^{-3}}$"),             Some(true)),
    Variable::new("temp",             Some(r"$T$"),                         Some(r"$\mathrm{K}$"),                      Some(true)),
    Variable::new("eint",             Some(r"$e_\mathrm{int}$"),            Some(r"$\mathrm{erg\,g^{-1}}$"),            Some(true)),
    Variable::new("ener",             Some(r"$e_\mathrm{tot}$"),            Some(r"$\mathrm{erg\,g^{-1}}$"),            Some(true)),
    Variable::new("velx",             Some(r"$v$"),                         Some(r"$\mathrm{cm\,s^{-1}}$"),             Some(false)),
    Variable::new("vely",             None,                                 None,                                       Some(false)),
    Variable::new("velz",             None,                                 None,                                       Some(false)),
    Variable::new("vrad",             Some(r"$v_\mathrm{rad}$"),            Some(r"$\mathrm{cm\,s^{-1}}$"),             Some(false)),
    Variable::new("entr",             None,                                 None,                                       Some(false)),
    Variable::new("eexp",             Some(r"$E_\mathrm{exp}$"),            Some(r"$\mathrm{erg}$"),                    None),
    Variable::new("max_shock_radius", Some(r"$r_\mathrm{sh}$"),             Some(r"$\mathrm{cm}$"),                     Some(true)),
    Variable::new("shock_vel",        Some(r"$v_\mathrm{sh}$"),             Some(r"$\mathrm{cm\,s^{-1}}$"),             None),
    Variable::new("explosion_energy", Some(r"$E_\mathrm{exp}$"),            Some(r"$\mathrm{erg}$"),                    None),
    Variable::new("point_mass",       Some(r"$m_\mathrm{point}$"),          Some(r"$\mathrm{g}$"),                      None),
    Variable::new("pres",             Some("Pressure"),                     Some(r"$\mathrm{g\,cm^{-1}\,s^{-2}}$"),     Some(true)),
    Variable::new("ye",               Some(r"$Y_e$"),                       None,                                       Some(false)),
    Variable::new("sumy",             Some("SumY"),                         None,                                       Some(false)),
    Variable::new("abar",             Some(r"$\mathcal{\bar{A}}$"),         None,                                       None),
    Variable::new("zbar",             Some(r"$\mathcal{\bar{Z}}$"),         None,                                       None),
];

// Built once on first lookup, read-only afterwards
static REGISTRY: OnceLock<HashMap<&'static str, &'static Variable>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, &'static Variable> {
    REGISTRY.get_or_init(|| VARIABLES.iter().map(|v| (v.name, v)).collect())
}

/// Every variable in the registry
pub fn variables() -> &'static [Variable] {
    VARIABLES
}

/// Look up the metadata for a variable
///
/// ```rust
/// # use flashy_labels::variable;
/// let dens = variable("dens").unwrap();
/// assert_eq!(dens.log, Some(true));
/// assert!(variable("not_a_variable").is_none());
/// ```
pub fn variable(name: &str) -> Option<&'static Variable> {
    registry().get(name).copied()
}

/// LaTeX label of a variable, if known
pub fn label(name: &str) -> Option<&'static str> {
    variable(name).and_then(|v| v.label)
}

/// LaTeX unit of a variable, if known
pub fn unit(name: &str) -> Option<&'static str> {
    variable(name).and_then(|v| v.unit)
}

/// Whether a variable is best plotted on a log scale
///
/// False for unknown variables and those without a preference.
pub fn should_plot_log(name: &str) -> bool {
    variable(name).and_then(|v| v.log).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = VARIABLES.iter().map(|v| v.name).collect();
        assert_eq!(names.len(), VARIABLES.len());
    }

    #[test]
    fn log_only_entries() {
        let vely = variable("vely").unwrap();
        assert_eq!(vely.label, None);
        assert_eq!(vely.unit, None);
        assert!(!should_plot_log("vely"));
    }
}

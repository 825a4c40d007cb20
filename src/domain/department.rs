//! Static department and category reference data.
//!
//! Every engagement department the office reports on, tagged with its
//! reporting category. The enrichment engine only reads this data; it is
//! never derived or mutated at runtime.

use std::fmt;

/// The possible engagement category values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LdlDepartment,
    LdlNoDepartment,
    LdlAcademy,
    PreProf,
    EngMasters,
    AmsFmDataSci,
    Soar,
    PaDropIns,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LdlDepartment => "ldl_department",
            Category::LdlNoDepartment => "ldl_no_department",
            Category::LdlAcademy => "ldl_academy",
            Category::PreProf => "pre_prof",
            Category::EngMasters => "eng_masters",
            Category::AmsFmDataSci => "ams_fm_data_sci",
            Category::Soar => "soar",
            Category::PaDropIns => "pa_drop_ins",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The possible engagement department values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    AmsFmDataSci,
    BioBrainSci,
    Bme,
    ChembeMatSci,
    CompElecEng,
    EngMasters,
    HistPhilHum,
    IntSocAnth,
    LitLangFilm,
    MiscEng,
    PaDropIns,
    PhysEnvSci,
    PolEconFin,
    PrePubHealth,
    SoarAthletics,
    SoarCss,
    SoarDivIncl,
    SoarFyeKsas,
    SoarFyeWse,
    SoarSli,
    StemAcademy,
    AmmAcademy,
    FinanceAcademy,
    ConsultingAcademy,
    HealthSciAcademy,
    NpGovAcademy,
    PreProf,
    NoDepartment,
}

impl Department {
    /// The wire name used in lookup tables and output files
    pub fn name(&self) -> &'static str {
        match self {
            Department::AmsFmDataSci => "ams_fm_data_sci",
            Department::BioBrainSci => "bio_brain_sci",
            Department::Bme => "bme",
            Department::ChembeMatSci => "chembe_mat_sci",
            Department::CompElecEng => "comp_elec_eng",
            Department::EngMasters => "eng_masters",
            Department::HistPhilHum => "hist_phil_hum",
            Department::IntSocAnth => "int_soc_anth",
            Department::LitLangFilm => "lit_lang_film",
            Department::MiscEng => "misc_eng",
            Department::PaDropIns => "pa_drop_ins",
            Department::PhysEnvSci => "phys_env_sci",
            Department::PolEconFin => "pol_econ_fin",
            Department::PrePubHealth => "pre_pub_health",
            Department::SoarAthletics => "soar_athletics",
            Department::SoarCss => "soar_css",
            Department::SoarDivIncl => "soar_div_incl",
            Department::SoarFyeKsas => "soar_fye_ksas",
            Department::SoarFyeWse => "soar_fye_wse",
            Department::SoarSli => "soar_sli",
            Department::StemAcademy => "stem_academy",
            Department::AmmAcademy => "amm_academy",
            Department::FinanceAcademy => "finance_academy",
            Department::ConsultingAcademy => "consulting_academy",
            Department::HealthSciAcademy => "health_sci_academy",
            Department::NpGovAcademy => "np_gov_academy",
            Department::PreProf => "pre_prof",
            Department::NoDepartment => "no_dept",
        }
    }

    /// The reporting category this department rolls up into
    pub fn category(&self) -> Category {
        match self {
            Department::AmsFmDataSci => Category::AmsFmDataSci,
            Department::EngMasters => Category::EngMasters,
            Department::PaDropIns => Category::PaDropIns,
            Department::PreProf => Category::PreProf,
            Department::NoDepartment => Category::LdlNoDepartment,
            Department::SoarAthletics
            | Department::SoarCss
            | Department::SoarDivIncl
            | Department::SoarFyeKsas
            | Department::SoarFyeWse
            | Department::SoarSli => Category::Soar,
            Department::StemAcademy
            | Department::AmmAcademy
            | Department::FinanceAcademy
            | Department::ConsultingAcademy
            | Department::HealthSciAcademy
            | Department::NpGovAcademy => Category::LdlAcademy,
            Department::BioBrainSci
            | Department::Bme
            | Department::ChembeMatSci
            | Department::CompElecEng
            | Department::HistPhilHum
            | Department::IntSocAnth
            | Department::LitLangFilm
            | Department::MiscEng
            | Department::PhysEnvSci
            | Department::PolEconFin
            | Department::PrePubHealth => Category::LdlDepartment,
        }
    }

    /// Resolve a wire name back to its department, if known
    pub fn from_name(name: &str) -> Option<Department> {
        ALL_DEPARTMENTS.iter().copied().find(|d| d.name() == name)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The complete closed set of departments
pub const ALL_DEPARTMENTS: [Department; 28] = [
    Department::AmsFmDataSci,
    Department::BioBrainSci,
    Department::Bme,
    Department::ChembeMatSci,
    Department::CompElecEng,
    Department::EngMasters,
    Department::HistPhilHum,
    Department::IntSocAnth,
    Department::LitLangFilm,
    Department::MiscEng,
    Department::PaDropIns,
    Department::PhysEnvSci,
    Department::PolEconFin,
    Department::PrePubHealth,
    Department::SoarAthletics,
    Department::SoarCss,
    Department::SoarDivIncl,
    Department::SoarFyeKsas,
    Department::SoarFyeWse,
    Department::SoarSli,
    Department::StemAcademy,
    Department::AmmAcademy,
    Department::FinanceAcademy,
    Department::ConsultingAcademy,
    Department::HealthSciAcademy,
    Department::NpGovAcademy,
    Department::PreProf,
    Department::NoDepartment,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_names_are_unique() {
        for (i, a) in ALL_DEPARTMENTS.iter().enumerate() {
            for b in &ALL_DEPARTMENTS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for dept in ALL_DEPARTMENTS {
            assert_eq!(Department::from_name(dept.name()), Some(dept));
        }
        assert_eq!(Department::from_name("underwater_basket_weaving"), None);
    }

    #[test]
    fn test_soar_departments_share_category() {
        assert_eq!(Department::SoarAthletics.category(), Category::Soar);
        assert_eq!(Department::SoarFyeWse.category(), Category::Soar);
        assert_eq!(Department::SoarCss.category(), Category::Soar);
        assert_eq!(Department::SoarDivIncl.category(), Category::Soar);
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::LdlDepartment.as_str(), "ldl_department");
        assert_eq!(Department::CompElecEng.category().as_str(), "ldl_department");
        assert_eq!(Department::NoDepartment.category().as_str(), "ldl_no_department");
    }
}

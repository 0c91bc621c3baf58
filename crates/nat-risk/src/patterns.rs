// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crisis pattern groups for the local classifier.
//!
//! Each group is a list of substrings plus verb/object combinations (any one
//! triggers the group), the flag it adds, the level it clamps up to, and the
//! resources it suggests. Terms are stored normalized (lower-case, no
//! diacritics) and matched against the normalized message. The exact terms and
//! thresholds are the auditable contract of the classifier; extend them, don't
//! generalize them.

use nat_core::{RiskFlag, SupportResource};

/// One group of equivalent crisis signals.
#[derive(Debug)]
pub struct PatternGroup {
    /// Short name used in debug logs.
    pub name: &'static str,
    pub terms: &'static [&'static str],
    /// `(verbs, objects)` pairs; a verb immediately followed by one of its
    /// objects triggers the group.
    pub combinations: &'static [(&'static [&'static str], &'static [&'static str])],
    pub flag: RiskFlag,
    /// Level the analysis is raised to (never lowered) when the group fires.
    pub min_level: u8,
    pub resources: &'static [SupportResource],
}

impl PatternGroup {
    /// True if any term or verb/object combination occurs in the normalized text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.terms.iter().any(|term| normalized.contains(term))
            || self.combinations.iter().any(|(verbs, objects)| {
                verbs.iter().any(|verb| {
                    objects
                        .iter()
                        .any(|object| contains_pair(normalized, verb, object))
                })
            })
    }
}

/// `"{verb} {object}"` occurs in `text`, without allocating the phrase.
fn contains_pair(text: &str, verb: &str, object: &str) -> bool {
    text.match_indices(verb).any(|(start, _)| {
        text[start + verb.len()..]
            .strip_prefix(' ')
            .is_some_and(|rest| rest.starts_with(object))
    })
}

const SUICIDAL_IDEATION: &[&str] = &[
    "quero morrer",
    "queria morrer",
    "me matar",
    "suicidio",
    "suicidar",
    "suicida",
    "tirar minha vida",
    "tirar a minha vida",
    "tirar minha propria vida",
    "acabar com minha vida",
    "acabar com a minha vida",
    "acabar com tudo",
    "nao quero mais viver",
    "nao quero viver",
    "nao vale a pena viver",
    "melhor se eu nao existisse",
    "melhor sem mim",
    "queria estar morta",
    "desaparecer para sempre",
    "sumir para sempre",
    "tomar todos os remedios",
    "tomar todos os comprimidos",
    "tomar todas as pilulas",
    "tomar a cartela inteira",
    "overdose",
    "me jogar da",
    "me jogar do",
    "me jogar de um",
    "me jogar de uma",
    "me jogar pela",
    "me jogar na frente",
    "me jogar embaixo",
    "me enforcar",
];

const HARM_TO_BABY: &[&str] = &[
    "bebe ficaria melhor morto",
    "bebe estaria melhor morto",
    "queria que o bebe morresse",
    "queria que o bebe sumisse",
];

const HARM_VERBS: &[&str] = &[
    "machucar",
    "matar",
    "sacudir",
    "chacoalhar",
    "sufocar",
    "afogar",
    "jogar",
    "ferir",
    "agredir",
    "bater no",
    "bater na",
    "bater em",
    "fazer mal ao",
    "fazer mal a",
    "fazer mal para",
    "fazer mal pro",
    "fazer mal pra",
];

/// Infant objects, with and without article and possessive.
const INFANT_OBJECTS: &[&str] = &[
    "bebe",
    "o bebe",
    "a bebe",
    "meu bebe",
    "minha bebe",
    "o meu bebe",
    "a minha bebe",
    "nenem",
    "o nenem",
    "a nenem",
    "meu nenem",
    "minha nenem",
    "filho",
    "filha",
    "o filho",
    "a filha",
    "meu filho",
    "minha filha",
    "o meu filho",
    "a minha filha",
    "recem-nascido",
    "recem nascido",
    "o recem-nascido",
    "o recem nascido",
];

const PSYCHOSIS: &[&str] = &[
    "ouvindo vozes",
    "ouco vozes",
    "escuto vozes",
    "escutando vozes",
    "vozes na minha cabeca",
    "vozes mandando",
    "alucinacao",
    "alucinacoes",
    "alucinando",
    "delirio",
    "delirando",
    "vendo coisas que nao existem",
    "vejo coisas que nao existem",
    "o bebe nao e meu",
    "trocaram meu bebe",
];

const SELF_HARM: &[&str] = &[
    "me cortar",
    "me cortei",
    "me cortando",
    "me machucar",
    "me machuquei",
    "me machucando",
    "me ferir",
    "me feri",
    "me queimar",
    "me queimei",
    "automutilacao",
    "bater em mim mesma",
    "cortar os pulsos",
    "cortar meus pulsos",
    "cortar o pulso",
    "cortar meu pulso",
    "cortei os pulsos",
    "cortei meu pulso",
];

const SEVERE_DEPRESSION: &[&str] = &[
    "nao consigo levantar",
    "nao consigo me levantar",
    "nao consigo sair da cama",
    "nao saio da cama",
    "nao quero sair da cama",
    "nao levanto da cama",
    "nao consigo cuidar do bebe",
    "nao consigo cuidar do meu bebe",
    "nao consigo cuidar do meu filho",
    "nao consigo cuidar da minha filha",
    "nao consigo cuidar da minha bebe",
    "nao consigo cuidar da bebe",
    "nao consigo fazer nada",
    "nao tenho forcas para nada",
];

const PPD: &[&str] = &[
    "depressao pos-parto",
    "depressao pos parto",
    "depressao posparto",
    "depressao no pos-parto",
    "depressao no pos parto",
    "depressao pos-natal",
    "depressao puerperal",
    "depressao perinatal",
];

const BURNOUT: &[&str] = &[
    "nao aguento mais",
    "nao aguento",
    "nao dou conta",
    "sem energia",
    "sem forcas",
    "exausta",
    "exausto",
    "exaustao",
    "esgotada",
    "esgotamento",
    "cansada demais",
    "sobrecarregada",
    "no meu limite",
];

/// All pattern groups, in evaluation order. Every group is evaluated for every
/// message; the outcome does not depend on the order.
pub static PATTERN_GROUPS: &[PatternGroup] = &[
    PatternGroup {
        name: "suicidal_ideation",
        terms: SUICIDAL_IDEATION,
        combinations: &[],
        flag: RiskFlag::SuicidalIdeation,
        min_level: 10,
        resources: &[SupportResource::Cvv, SupportResource::Emergency],
    },
    PatternGroup {
        name: "harm_to_baby",
        terms: HARM_TO_BABY,
        combinations: &[(HARM_VERBS, INFANT_OBJECTS)],
        flag: RiskFlag::HarmToBaby,
        min_level: 10,
        resources: &[SupportResource::Emergency, SupportResource::Caps],
    },
    PatternGroup {
        name: "psychosis",
        terms: PSYCHOSIS,
        combinations: &[],
        flag: RiskFlag::Psychosis,
        min_level: 9,
        resources: &[SupportResource::Emergency, SupportResource::Caps],
    },
    PatternGroup {
        name: "self_harm",
        terms: SELF_HARM,
        combinations: &[],
        flag: RiskFlag::SelfHarm,
        min_level: 8,
        resources: &[SupportResource::Cvv, SupportResource::Therapy],
    },
    PatternGroup {
        name: "incapacitation",
        terms: SEVERE_DEPRESSION,
        combinations: &[],
        flag: RiskFlag::SevereDepression,
        min_level: 7,
        resources: &[SupportResource::Therapy, SupportResource::Caps],
    },
    PatternGroup {
        name: "postpartum_depression",
        terms: PPD,
        combinations: &[],
        flag: RiskFlag::Ppd,
        min_level: 6,
        resources: &[SupportResource::Therapy, SupportResource::Caps],
    },
    PatternGroup {
        name: "burnout",
        terms: BURNOUT,
        combinations: &[],
        flag: RiskFlag::Burnout,
        min_level: 4,
        resources: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn group(flag: RiskFlag) -> &'static PatternGroup {
        PATTERN_GROUPS.iter().find(|g| g.flag == flag).unwrap()
    }

    fn all_words(group: &PatternGroup) -> Vec<&'static str> {
        let mut words = group.terms.to_vec();
        for (verbs, objects) in group.combinations {
            words.extend_from_slice(verbs);
            words.extend_from_slice(objects);
        }
        words
    }

    #[test]
    fn all_terms_are_normalized() {
        for group in PATTERN_GROUPS {
            for term in all_words(group) {
                assert_eq!(
                    normalize(term),
                    term,
                    "term {term:?} in group {} is not normalized",
                    group.name
                );
            }
        }
    }

    #[test]
    fn every_group_has_terms_and_a_bounded_level() {
        for group in PATTERN_GROUPS {
            assert!(!group.terms.is_empty(), "group {} has no terms", group.name);
            assert!(group.min_level <= 10);
        }
    }

    #[test]
    fn groups_cover_each_crisis_flag_once() {
        let mut flags: Vec<RiskFlag> = PATTERN_GROUPS.iter().map(|g| g.flag).collect();
        flags.sort();
        flags.dedup();
        assert_eq!(flags.len(), PATTERN_GROUPS.len());
    }

    #[test]
    fn matching_is_substring_based() {
        let burnout = group(RiskFlag::Burnout);
        assert!(burnout.matches("hoje eu nao aguento mais nada"));
        assert!(!burnout.matches("hoje foi um dia tranquilo"));
    }

    #[test]
    fn pair_requires_adjacent_verb_and_object() {
        assert!(contains_pair("vou sufocar meu bebe", "sufocar", "meu bebe"));
        assert!(!contains_pair("sufocar de calor com meu bebe", "sufocar", "meu bebe"));
        assert!(!contains_pair("bebe", "sufocar", "bebe"));
    }

    #[test]
    fn every_harm_verb_pairs_with_every_infant_object() {
        let harm = group(RiskFlag::HarmToBaby);
        for verb in HARM_VERBS {
            for object in INFANT_OBJECTS {
                let text = format!("as vezes penso em {verb} {object} de noite");
                assert!(harm.matches(&text), "{text:?}");
            }
        }
    }

    #[test]
    fn phrases_trigger_their_group() {
        let table: &[(RiskFlag, &[&str])] = &[
            (
                RiskFlag::SuicidalIdeation,
                &[
                    "quero morrer",
                    "vou tomar todos os remédios e acabar com isso",
                    "queria me jogar da janela",
                    "pensei em me jogar de uma ponte",
                    "nao vale a pena viver",
                ],
            ),
            (
                RiskFlag::HarmToBaby,
                &[
                    "quero matar meu filho",
                    "tenho vontade de sacudir meu bebê",
                    "penso em machucar a minha bebê",
                    "vou sufocar meu bebê",
                    "tenho medo de fazer mal à minha filha",
                    "as vezes acho que o bebê ficaria melhor morto",
                ],
            ),
            (
                RiskFlag::Psychosis,
                &["estou ouvindo vozes", "acho que trocaram meu bebê"],
            ),
            (
                RiskFlag::SelfHarm,
                &[
                    "pensei em cortar os pulsos",
                    "quero me cortar",
                    "ontem me queimei de proposito",
                ],
            ),
            (
                RiskFlag::SevereDepression,
                &[
                    "não consigo sair da cama",
                    "não consigo cuidar da minha bebê",
                ],
            ),
            (
                RiskFlag::Ppd,
                &["acho que tenho depressão pós-parto", "depressao puerperal"],
            ),
            (
                RiskFlag::Burnout,
                &["estou exausta", "não dou conta de tudo"],
            ),
        ];

        for (flag, phrases) in table {
            let group = group(*flag);
            for phrase in *phrases {
                assert!(
                    group.matches(&normalize(phrase)),
                    "{phrase:?} should trigger {}",
                    group.name
                );
            }
        }
    }

    #[test]
    fn everyday_phrases_do_not_trigger_harm_to_baby() {
        let harm = group(RiskFlag::HarmToBaby);
        for phrase in [
            "vou jogar bola com meu filho",
            "matar a saudade da minha filha",
            "quero me jogar de cabeça nos cuidados com o bebê",
            "o bebê dormiu bem hoje",
        ] {
            assert!(!harm.matches(&normalize(phrase)), "{phrase:?}");
        }
    }
}

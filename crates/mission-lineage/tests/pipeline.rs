//! Generations carried through stored definitions.

use mission_core::{DecoderConfig, Error, LookupPolicy, SpliceConfig};
use mission_genome::Splicer;
use mission_lineage::{GenerationPipeline, PipelineStage};
use mission_runtime::seed::IDENTITY;
use mission_runtime::{
    parse_definition, ActivationService, DefinitionLoader, DefinitionStore, DirectoryStore,
    Entity, MemoryStore, SelfContainedMissionStatement,
};
use std::sync::Arc;

fn seed_unit() -> SelfContainedMissionStatement {
    SelfContainedMissionStatement::new(DecoderConfig::default()).unwrap()
}

#[test]
fn test_memory_generation_renders_child() {
    let store = Arc::new(MemoryStore::new());
    let loader = DefinitionLoader::new(Arc::clone(&store), DecoderConfig::default());
    let seed = seed_unit();
    let mut splicer = Splicer::seeded(SpliceConfig::default(), 42);

    let mut out = Vec::new();
    let outcome = GenerationPipeline::new("Gen1", store.as_ref(), &loader)
        .run(&seed, &seed, &mut splicer, &mut out)
        .unwrap();

    assert_eq!(store.names(), vec!["Gen1".to_string()]);
    assert_eq!(outcome.entity.identity(), "Gen1");
    assert_eq!(outcome.entity.genome(), &outcome.genome);

    let sentence = String::from_utf8(out).unwrap();
    assert_eq!(sentence, outcome.sentence);
    if !outcome.genome.is_empty() {
        assert!(sentence.ends_with(".\n"));
    }
}

#[test]
fn test_directory_generations_chain() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path());
    let loader = DefinitionLoader::new(store.clone(), DecoderConfig::default());
    let mut splicer = Splicer::seeded(SpliceConfig::default(), 7);

    let seed = loader.activate(IDENTITY).unwrap();
    let gen1 = GenerationPipeline::new("Gen1", &store, &loader)
        .run(seed.as_ref(), seed.as_ref(), &mut splicer, &mut Vec::new())
        .unwrap();
    assert!(store.path_for("Gen1").exists());

    // the partner comes back from disk, as a separate run would see it
    let partner = loader.activate("Gen1").unwrap();
    assert_eq!(partner.genome(), &gen1.genome);

    let gen2 = GenerationPipeline::new("Gen2", &store, &loader)
        .run(partner.as_ref(), seed.as_ref(), &mut splicer, &mut Vec::new())
        .unwrap();
    assert_eq!(gen2.parents, vec!["Gen1".to_string(), IDENTITY.to_string()]);

    let text = std::fs::read_to_string(store.path_for("Gen2")).unwrap();
    assert!(!text.contains("Gen1"));
    assert_eq!(parse_definition(&text).unwrap(), ("Gen2".to_string(), gen2.genome.clone()));
}

#[test]
fn test_same_seed_same_child() {
    let children: Vec<_> = (0..2)
        .map(|_| {
            let store = MemoryStore::new();
            let loader = DefinitionLoader::new(&store, DecoderConfig::default());
            let seed = seed_unit();
            let mut splicer = Splicer::seeded(SpliceConfig::default(), 1234);
            GenerationPipeline::new("Twin", &store, &loader)
                .run(&seed, &seed, &mut splicer, &mut Vec::new())
                .unwrap()
                .genome
        })
        .collect();

    assert_eq!(children[0], children[1]);
}

#[test]
fn test_unwritable_store_fails_emit() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();

    let store = DirectoryStore::new(&blocker);
    let loader = DefinitionLoader::new(store.clone(), DecoderConfig::default());
    let seed = seed_unit();
    let mut splicer = Splicer::seeded(SpliceConfig::default(), 3);

    let mut pipeline = GenerationPipeline::new("Gen1", &store, &loader);
    pipeline.combine(&seed, &seed, &mut splicer).unwrap();
    assert!(matches!(pipeline.emit(), Err(Error::Io(_))));
    assert_eq!(pipeline.stage(), PipelineStage::Failed);
    assert!(!store.contains("Gen1"));
}

#[test]
fn test_strict_lookup_fails_seed_render() {
    let decoder = DecoderConfig {
        lookup_policy: LookupPolicy::Strict,
    };
    let seed = SelfContainedMissionStatement::new(decoder).unwrap();

    let mut out = Vec::new();
    let err = seed.render(&mut out).unwrap_err();
    assert!(matches!(err, Error::LookupUnderflow { code: 1, .. }));
}

#[test]
fn test_marker_names_rejected_before_storing() {
    let store = MemoryStore::new();
    let loader = DefinitionLoader::new(&store, DecoderConfig::default());
    let seed = seed_unit();
    let mut splicer = Splicer::seeded(SpliceConfig::default(), 8);

    for name in ["A", "STRAND", "pub"] {
        let result = GenerationPipeline::new(name, &store, &loader)
            .run(&seed, &seed, &mut splicer, &mut Vec::new());
        assert!(matches!(result, Err(Error::Combination(_))), "{name:?}");
    }
    assert!(store.is_empty());
}

#[test]
fn test_every_accepted_name_can_parent() {
    let store = MemoryStore::new();
    let loader = DefinitionLoader::new(&store, DecoderConfig::default());
    let seed = seed_unit();
    let mut splicer = Splicer::seeded(SpliceConfig::default(), 8);

    for name in ["Ada", "Gen1"] {
        GenerationPipeline::new(name, &store, &loader)
            .run(&seed, &seed, &mut splicer, &mut Vec::new())
            .unwrap();
        let parent = loader.activate(name).unwrap();

        let child = format!("{}Child", name);
        let outcome = GenerationPipeline::new(child.as_str(), &store, &loader)
            .run(parent.as_ref(), &seed, &mut splicer, &mut Vec::new())
            .unwrap();
        assert_eq!(outcome.parents[0], name);
    }
}

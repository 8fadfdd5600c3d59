use pokedex_lookup::client::PokeApiClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_get(server: &MockServer, at: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_and_decodes_a_pokemon() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/pokemon/pikachu",
        json!({
            "id": 25,
            "name": "pikachu",
            "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
            "moves": [
                {"move": {"name": "thunder-shock", "url": format!("{}/move/84", server.uri())}}
            ],
            "sprites": {"other": {"official-artwork": {
                "front_default": "https://img.example/25.png",
                "front_shiny": null
            }}}
        }),
    )
    .await;

    let api = PokeApiClient::with_base_url(server.uri());
    let pokemon = api
        .fetch_pokemon("pikachu")
        .await
        .unwrap()
        .expect("pikachu should be found");

    assert_eq!(pokemon.id, 25);
    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.types.len(), 1);
    assert_eq!(pokemon.types[0].kind.name, "electric");
    assert_eq!(pokemon.moves[0].entry.name, "thunder-shock");
    assert_eq!(
        pokemon.sprites.other.official_artwork.front_default.as_deref(),
        Some("https://img.example/25.png")
    );
    assert_eq!(pokemon.sprites.other.official_artwork.front_shiny, None);
}

#[tokio::test]
async fn missing_pokemon_is_none_not_an_error() {
    let server = MockServer::start().await;
    let api = PokeApiClient::with_base_url(server.uri());

    let result = api.fetch_pokemon("missingno").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn server_errors_surface_as_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = PokeApiClient::with_base_url(server.uri());
    assert!(api.fetch_pokemon("pikachu").await.is_err());
}

#[tokio::test]
async fn decodes_move_detail_with_null_power_and_accuracy() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/move/113",
        json!({
            "name": "light-screen",
            "type": {"name": "psychic", "url": ""},
            "power": null,
            "accuracy": null
        }),
    )
    .await;

    let api = PokeApiClient::with_base_url(server.uri());
    let detail = api
        .fetch_move(&format!("{}/move/113", server.uri()))
        .await
        .unwrap();

    assert_eq!(detail.name, "light-screen");
    assert_eq!(detail.kind.name, "psychic");
    assert_eq!(detail.power, None);
    assert_eq!(detail.accuracy, None);
}

#[tokio::test]
async fn decodes_type_damage_relations_and_members() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/type/water",
        json!({
            "name": "water",
            "damage_relations": {
                "double_damage_from": [{"name": "electric", "url": ""}, {"name": "grass", "url": ""}],
                "half_damage_from": [{"name": "fire", "url": ""}],
                "no_damage_from": []
            },
            "pokemon": [{"pokemon": {"name": "squirtle", "url": ""}, "slot": 1}]
        }),
    )
    .await;

    let api = PokeApiClient::with_base_url(server.uri());
    let type_data = api.fetch_type("water").await.unwrap().expect("water exists");

    assert_eq!(type_data.name, "water");
    assert_eq!(type_data.damage_relations.double_damage_from.len(), 2);
    assert_eq!(type_data.damage_relations.half_damage_from[0].name, "fire");
    assert!(type_data.damage_relations.no_damage_from.is_empty());
    assert_eq!(type_data.pokemon[0].pokemon.name, "squirtle");
}

#[tokio::test]
async fn evolution_chain_is_a_two_step_lookup() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/pokemon-species/172",
        json!({"evolution_chain": {"url": format!("{}/evolution-chain/10", server.uri())}}),
    )
    .await;
    mock_get(
        &server,
        "/evolution-chain/10",
        json!({
            "chain": {
                "species": {"name": "pichu", "url": ""},
                "evolution_details": [],
                "evolves_to": [{
                    "species": {"name": "pikachu", "url": ""},
                    "evolution_details": [{"min_level": null}],
                    "evolves_to": [{
                        "species": {"name": "raichu", "url": ""},
                        "evolution_details": [{"min_level": 20}],
                        "evolves_to": []
                    }]
                }]
            }
        }),
    )
    .await;

    let api = PokeApiClient::with_base_url(server.uri());
    let chain = api.fetch_evolution_chain(172).await.unwrap();

    assert_eq!(chain.chain.species.name, "pichu");
    let pikachu = &chain.chain.evolves_to[0];
    assert_eq!(pikachu.evolution_details[0].min_level, None);
    assert_eq!(pikachu.evolves_to[0].evolution_details[0].min_level, Some(20));
}

#[tokio::test]
async fn species_without_chain_link_is_an_error() {
    let server = MockServer::start().await;
    mock_get(&server, "/pokemon-species/132", json!({"evolution_chain": null})).await;

    let api = PokeApiClient::with_base_url(server.uri());
    assert!(api.fetch_evolution_chain(132).await.is_err());
}

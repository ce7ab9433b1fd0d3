//! Background ticker against the wall clock

use std::time::Duration;

use flockr_common::{try_init_tracing, AppConfig};
use flockr_service::dto::{CreateChannelRequest, RegisterRequest};
use flockr_service::{
    spawn_scheduler, AuthService, ChannelService, ChannelsService, MessageService, ServiceContext,
};

#[tokio::test]
async fn test_scheduled_message_arrives_while_idle() {
    let _ = try_init_tracing();
    let config = AppConfig::for_testing();
    let ctx = ServiceContext::from_config(&config);

    let owner = AuthService::new(&ctx)
        .register(RegisterRequest {
            email: "owner@gmail.com".to_string(),
            password: "goodpassword".to_string(),
            name_first: "Hayden".to_string(),
            name_last: "Smith".to_string(),
        })
        .unwrap();
    let channel_id = ChannelsService::new(&ctx)
        .create(
            &owner.token,
            CreateChannelRequest {
                name: "general".to_string(),
                is_public: true,
            },
        )
        .unwrap()
        .channel_id;

    let due = ctx.now().timestamp() + 1;
    MessageService::new(&ctx)
        .send_later(&owner.token, channel_id, "wake up", due)
        .unwrap();

    let handle = spawn_scheduler(ctx.clone(), config.scheduler.tick_interval());
    let mut delivered = false;
    for _ in 0..300 {
        if ctx.pending_tasks() == 0 {
            delivered = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    handle.abort();
    assert!(delivered);

    let page = ChannelService::new(&ctx)
        .messages(&owner.token, channel_id, 0)
        .unwrap();
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.messages[0].message, "wake up");
}
